pub mod debug_route;
pub mod health_route;
pub mod log_run;
pub mod restore_client_config;
pub mod restore_socket_handlers;
pub mod socket_errors;

use crate::types::Fix;

// Scripts are independent of one another and safe to run in any order.
#[derive(Clone, Copy)]
pub struct Script {
    pub name: &'static str,
    pub summary: &'static str,
    pub fixes: fn() -> Vec<Fix>,
}

pub fn catalog() -> Vec<Script> {
    vec![
        Script {
            name: "debug-route",
            summary: "Add the /debug page import and route to the client router",
            fixes: debug_route::fixes,
        },
        Script {
            name: "socket-errors",
            summary: "Add a per-socket error handler to the server entrypoint",
            fixes: socket_errors::fixes,
        },
        Script {
            name: "health-route",
            summary: "Add the GET /health endpoint to the server entrypoint",
            fixes: health_route::fixes,
        },
        Script {
            name: "log-run",
            summary: "Append a dated run entry to the project changelog",
            fixes: log_run::fixes,
        },
        Script {
            name: "restore-socket-handlers",
            summary: "Overwrite the socket handler module with its known-good body",
            fixes: restore_socket_handlers::fixes,
        },
        Script {
            name: "restore-client-config",
            summary: "Overwrite the client Vite config with its known-good body",
            fixes: restore_client_config::fixes,
        },
    ]
}

pub fn find(name: &str) -> Option<Script> {
    catalog().into_iter().find(|script| script.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<&str> = catalog().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("debug-route").is_some());
        assert!(find("no-such-script").is_none());
    }

    #[test]
    fn test_every_script_yields_fixes() {
        for script in catalog() {
            let fixes = (script.fixes)();
            assert!(!fixes.is_empty(), "script {} has no fixes", script.name);
            for fix in &fixes {
                assert!(fix.rel_path.is_relative());
            }
        }
    }
}
