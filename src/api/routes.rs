//! Path and method routing for the `/records` collection

use reqwest::Method;

use crate::errors::RegistryError;

/// Collection prefix
pub const COLLECTION: &str = "/records";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Page,
    Search,
    Get(u32),
    Create,
    Replace(u32),
    Patch(u32),
    Delete(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(Route),
    MethodNotAllowed { allow: &'static str },
    Invalid(RegistryError),
    Unknown,
}

/// Map a method and decoded path onto a route
///
/// Trailing slashes are ignored. The literal segments `all` and `search`
/// take precedence over id lookup.
#[must_use]
pub fn resolve(method: &Method, path: &str) -> Resolution {
    let trimmed = path.trim_end_matches('/');
    let Some(rest) = trimmed.strip_prefix(COLLECTION) else {
        return Resolution::Unknown;
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return Resolution::Unknown;
    }

    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => match *method {
            Method::GET => Resolution::Matched(Route::List),
            Method::POST => Resolution::Matched(Route::Create),
            _ => Resolution::MethodNotAllowed { allow: "GET, POST" },
        },
        ["all"] => only_get(method, Route::Page),
        ["search"] => only_get(method, Route::Search),
        [raw_id] => {
            let allow = "GET, PUT, PATCH, DELETE";
            let build: fn(u32) -> Route = match *method {
                Method::GET => Route::Get,
                Method::PUT => Route::Replace,
                Method::PATCH => Route::Patch,
                Method::DELETE => Route::Delete,
                _ => return Resolution::MethodNotAllowed { allow },
            };
            match raw_id.parse::<u32>() {
                Ok(id) => Resolution::Matched(build(id)),
                Err(_) => Resolution::Invalid(RegistryError::BadRequest(format!(
                    "record id must be a non-negative integer, got '{raw_id}'"
                ))),
            }
        }
        _ => Resolution::Unknown,
    }
}

fn only_get(method: &Method, route: Route) -> Resolution {
    if *method == Method::GET {
        Resolution::Matched(route)
    } else {
        Resolution::MethodNotAllowed { allow: "GET" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_routes() {
        assert_eq!(
            resolve(&Method::GET, "/records"),
            Resolution::Matched(Route::List)
        );
        assert_eq!(
            resolve(&Method::POST, "/records/"),
            Resolution::Matched(Route::Create)
        );
        assert_eq!(
            resolve(&Method::DELETE, "/records"),
            Resolution::MethodNotAllowed { allow: "GET, POST" }
        );
    }

    #[test]
    fn test_literal_segments_win_over_ids() {
        assert_eq!(
            resolve(&Method::GET, "/records/all"),
            Resolution::Matched(Route::Page)
        );
        assert_eq!(
            resolve(&Method::GET, "/records/search"),
            Resolution::Matched(Route::Search)
        );
        assert_eq!(
            resolve(&Method::POST, "/records/search"),
            Resolution::MethodNotAllowed { allow: "GET" }
        );
    }

    #[test]
    fn test_item_routes() {
        assert_eq!(
            resolve(&Method::GET, "/records/25"),
            Resolution::Matched(Route::Get(25))
        );
        assert_eq!(
            resolve(&Method::PUT, "/records/25"),
            Resolution::Matched(Route::Replace(25))
        );
        assert_eq!(
            resolve(&Method::PATCH, "/records/25/"),
            Resolution::Matched(Route::Patch(25))
        );
        assert_eq!(
            resolve(&Method::DELETE, "/records/25"),
            Resolution::Matched(Route::Delete(25))
        );
        assert!(matches!(
            resolve(&Method::GET, "/records/pikachu"),
            Resolution::Invalid(RegistryError::BadRequest(_))
        ));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(resolve(&Method::GET, "/"), Resolution::Unknown);
        assert_eq!(resolve(&Method::GET, "/recordsx"), Resolution::Unknown);
        assert_eq!(resolve(&Method::GET, "/records/1/extra"), Resolution::Unknown);
    }
}
