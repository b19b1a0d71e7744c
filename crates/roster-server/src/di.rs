//! Dependency injection module using Shaku.
//!
//! One module per storage backend:
//! - `MySqlModule`: connection pool, MySQL repository and employee service
//! - `InMemoryModule`: in-memory repository and employee service

use roster_config::{DatabaseConfig, StorageBackend};
use roster_core::{module, HasComponent, RosterResult};
use roster_repository::{
    DatabaseHealthCheck, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    EmployeeRepository, InMemoryEmployeeRepository, MySqlEmployeeRepository,
};
use roster_rest::AppState;
use roster_service::{EmployeeService, EmployeeServiceImpl};
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

module! {
    pub MySqlModule {
        components = [
            DatabasePool,
            MySqlEmployeeRepository,
            EmployeeServiceImpl,
        ],
        providers = [],
    }
}

module! {
    pub InMemoryModule {
        components = [
            InMemoryEmployeeRepository,
            EmployeeServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// Builds the MySQL module around an already connected pool.
#[must_use]
pub fn build_mysql_module(pool: DatabasePool) -> Arc<MySqlModule> {
    let module = MySqlModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool: pool.pool })
        .build();

    Arc::new(module)
}

/// Builds the in-memory module. Every call starts from an empty store.
#[must_use]
pub fn build_in_memory_module() -> Arc<InMemoryModule> {
    Arc::new(InMemoryModule::builder().build())
}

/// Components resolved for the configured backend.
pub struct Wiring {
    /// State handed to the router.
    pub state: AppState,
    /// Present for the MySQL backend; closed on shutdown.
    pub pool: Option<Arc<dyn DatabasePoolInterface>>,
}

/// Connects the configured backend and resolves the router state from it.
pub async fn wire(config: &DatabaseConfig) -> RosterResult<Wiring> {
    info!("Storage backend: {}", config.backend);

    match config.backend {
        StorageBackend::Mysql => {
            let pool = DatabasePool::connect(config).await?;
            let module = build_mysql_module(pool);

            let pool = module.database_pool();
            if config.run_migrations {
                pool.run_migrations().await?;
            }

            let state = AppState::from_module(module.as_ref())
                .with_health_check(Arc::new(DatabaseHealthCheck::new(pool.clone())));

            Ok(Wiring {
                state,
                pool: Some(pool),
            })
        }
        StorageBackend::Memory => {
            let module = build_in_memory_module();
            Ok(Wiring {
                state: AppState::from_module(module.as_ref()),
                pool: None,
            })
        }
    }
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Resolves the employee service from any module.
pub trait ServiceResolver {
    /// Resolves the employee service from the module.
    fn employee_service(&self) -> Arc<dyn EmployeeService>;
}

impl ServiceResolver for MySqlModule {
    fn employee_service(&self) -> Arc<dyn EmployeeService> {
        self.resolve()
    }
}

impl ServiceResolver for InMemoryModule {
    fn employee_service(&self) -> Arc<dyn EmployeeService> {
        self.resolve()
    }
}

/// Resolves the repository from any module.
pub trait RepositoryResolver {
    /// Resolves the employee repository from the module.
    fn employee_repository(&self) -> Arc<dyn EmployeeRepository>;
}

impl RepositoryResolver for MySqlModule {
    fn employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        self.resolve()
    }
}

impl RepositoryResolver for InMemoryModule {
    fn employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        self.resolve()
    }
}

/// Resolves the database pool from modules that have one.
pub trait DatabaseResolver {
    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for MySqlModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
