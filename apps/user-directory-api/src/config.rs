use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse_or};
use core_config::server::ServerConfig;
use database::postgres::PostgresConfig;
use domain_users::IdPolicy;
use std::time::Duration;
use strum::{Display, EnumString};

pub use core_config::Environment;

const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application configuration, composed from the shared config pieces.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub routes: RoutesConfig,
    pub store: StoreConfig,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let routes = RoutesConfig::from_env()?;
        let store = StoreConfig::from_env()?;
        let shutdown_timeout = Duration::from_secs(env_parse_or(
            "SHUTDOWN_TIMEOUT_SECS",
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        )?);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            routes,
            store,
            shutdown_timeout,
        })
    }
}

/// Where the users collection is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutesConfig {
    /// `""` or a path like `/api`
    pub api_prefix: String,
    /// Never empty, always starts with `/`
    pub users_path: String,
}

impl RoutesConfig {
    /// Externally visible collection path, e.g. `/api/users`.
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.api_prefix, self.users_path)
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api".to_string(),
            users_path: "/users".to_string(),
        }
    }
}

impl FromEnv for RoutesConfig {
    /// - `API_PREFIX`: defaults to `/api`, empty mounts at the root
    /// - `USERS_PATH`: defaults to `/users`
    fn from_env() -> Result<Self, ConfigError> {
        let api_prefix = normalize_path(&env_or_default("API_PREFIX", "/api"));
        let users_path = normalize_path(&env_or_default("USERS_PATH", "/users"));

        if users_path.is_empty() {
            return Err(ConfigError::ParseError {
                key: "USERS_PATH".to_string(),
                details: "must name a path segment".to_string(),
            });
        }

        Ok(Self {
            api_prefix,
            users_path,
        })
    }
}

/// `users/` and `/users` both become `/users`; `/` becomes `""`.
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    #[default]
    Memory,
    Postgres,
}

/// Which store backs the service, and how it assigns ids.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub id_policy: IdPolicy,
    /// Present exactly when `backend` is [`StoreBackend::Postgres`]
    pub database: Option<PostgresConfig>,
}

impl FromEnv for StoreConfig {
    /// - `USER_STORE`: `memory` (default) or `postgres`
    /// - `USER_ID_POLICY`: `assign-if-absent` (default) or `always-generate`
    /// - `DATABASE_URL` and `DB_*`: read only for the postgres store
    fn from_env() -> Result<Self, ConfigError> {
        let backend = env_parse_or("USER_STORE", StoreBackend::default())?;
        let id_policy = env_parse_or("USER_ID_POLICY", IdPolicy::default())?;

        let database = match backend {
            StoreBackend::Postgres => Some(PostgresConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            backend,
            id_policy,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "API_PREFIX",
        "USERS_PATH",
        "USER_STORE",
        "USER_ID_POLICY",
        "DATABASE_URL",
        "SHUTDOWN_TIMEOUT_SECS",
        "PORT",
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter().map(|key| (*key, None)).collect()
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(unset_all(), || {
            let config = Config::from_env().unwrap();

            assert_eq!(config.routes, RoutesConfig::default());
            assert_eq!(config.routes.collection_url(), "/api/users");
            assert_eq!(config.store.backend, StoreBackend::Memory);
            assert_eq!(config.store.id_policy, IdPolicy::AssignIfAbsent);
            assert!(config.store.database.is_none());
            assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.app.name, "user_directory_api");
        });
    }

    #[test]
    fn test_paths_are_normalized() {
        temp_env::with_vars(
            [("API_PREFIX", Some("v1/")), ("USERS_PATH", Some("people"))],
            || {
                let routes = RoutesConfig::from_env().unwrap();

                assert_eq!(routes.api_prefix, "/v1");
                assert_eq!(routes.users_path, "/people");
                assert_eq!(routes.collection_url(), "/v1/people");
            },
        );
    }

    #[test]
    fn test_root_prefix_is_empty() {
        temp_env::with_vars(
            [("API_PREFIX", Some("/")), ("USERS_PATH", None::<&str>)],
            || {
                let routes = RoutesConfig::from_env().unwrap();

                assert_eq!(routes.api_prefix, "");
                assert_eq!(routes.collection_url(), "/users");
            },
        );
    }

    #[test]
    fn test_empty_users_path_rejected() {
        temp_env::with_var("USERS_PATH", Some("/"), || {
            let err = RoutesConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { key, .. } if key == "USERS_PATH"));
        });
    }

    #[test]
    fn test_postgres_store_requires_database_url() {
        temp_env::with_vars(
            [("USER_STORE", Some("postgres")), ("DATABASE_URL", None)],
            || {
                let err = StoreConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "DATABASE_URL"));
            },
        );
    }

    #[test]
    fn test_postgres_store_reads_database_config() {
        temp_env::with_vars(
            [
                ("USER_STORE", Some("Postgres")),
                ("DATABASE_URL", Some("postgres://localhost/users")),
                ("USER_ID_POLICY", Some("always-generate")),
            ],
            || {
                let store = StoreConfig::from_env().unwrap();

                assert_eq!(store.backend, StoreBackend::Postgres);
                assert_eq!(store.id_policy, IdPolicy::AlwaysGenerate);
                assert_eq!(
                    store.database.unwrap().url(),
                    "postgres://localhost/users"
                );
            },
        );
    }

    #[test]
    fn test_invalid_store_and_policy() {
        temp_env::with_var("USER_STORE", Some("mongo"), || {
            let err = StoreConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { key, .. } if key == "USER_STORE"));
        });

        temp_env::with_vars(
            [("USER_STORE", None), ("USER_ID_POLICY", Some("sometimes"))],
            || {
                let err = StoreConfig::from_env().unwrap_err();
                assert!(
                    matches!(err, ConfigError::ParseError { key, .. } if key == "USER_ID_POLICY")
                );
            },
        );
    }

    #[test]
    fn test_invalid_shutdown_timeout() {
        temp_env::with_var("SHUTDOWN_TIMEOUT_SECS", Some("soon"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
