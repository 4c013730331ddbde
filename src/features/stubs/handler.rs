use axum::Json;
use axum::Router;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::routing::get;

use crate::core::error::AppError;
use crate::features::stubs::catalogue::{STUB_ROUTES, StubRoute};
use crate::features::stubs::dto::StubMessageDto;

pub fn handle_stub(
    route: &StubRoute,
    id: Option<String>,
    pairs: &[(String, String)],
) -> Result<Json<StubMessageDto>, AppError> {
    if let (Some(kind), Some(raw)) = (route.id_kind, id.as_deref()) {
        kind.check("id", raw)?;
    }

    for (key, value) in pairs {
        if let Some(param) = route.query.iter().find(|param| param.matches(key)) {
            param.kind.check(key, value)?;
        }
    }

    tracing::debug!(path = route.path, tag = route.tag, "serving placeholder route");

    Ok(Json(StubMessageDto {
        message: route.render(id.as_deref()),
    }))
}

fn resolve_id(
    route: &StubRoute,
    id: Result<Path<String>, PathRejection>,
) -> Result<Option<String>, AppError> {
    match (route.id_kind, id) {
        (None, _) => Ok(None),
        (Some(_), Ok(Path(id))) => Ok(Some(id)),
        (Some(_), Err(rejection)) => Err(rejection.into()),
    }
}

fn handle_stub_request(
    route: &StubRoute,
    id: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<StubMessageDto>, AppError> {
    let id = resolve_id(route, id)?;
    let Query(pairs) = query?;
    handle_stub(route, id, &pairs)
}

pub fn stub_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    STUB_ROUTES.iter().fold(Router::new(), |router, route| {
        router.route(
            route.path,
            get(
                move |id: Result<Path<String>, PathRejection>,
                      query: Result<Query<Vec<(String, String)>>, QueryRejection>| async move {
                    handle_stub_request(route, id, query)
                },
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stubs::catalogue::find_route;

    #[test]
    fn ignores_undeclared_query_parameters() {
        let route = find_route("/fronts").expect("fronts listing");
        let pairs = vec![("unknown".to_string(), "x".to_string())];
        let Json(body) = handle_stub(route, None, &pairs).expect("stub responds");
        assert_eq!(body.message, "Endpoint para listar frentes. (Não implementado)");
    }

    #[test]
    fn validates_declared_integer_parameters() {
        let route = find_route("/deputies/:id/expenses").expect("expenses");
        let pairs = vec![("year".to_string(), "twenty".to_string())];
        let err = handle_stub(route, Some("10".to_string()), &pairs).expect_err("invalid year");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn legacy_query_names_are_validated_too() {
        let route = find_route("/deputies/:id/expenses").expect("expenses");
        let pairs = vec![("ano".to_string(), "abc".to_string())];
        let err = handle_stub(route, Some("10".to_string()), &pairs).expect_err("invalid ano");
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("ano"));
    }

    #[test]
    fn text_identifiers_pass_through() {
        let route = find_route("/votes/:id").expect("vote detail");
        let Json(body) =
            handle_stub(route, Some("2265603-43".to_string()), &[]).expect("stub responds");
        assert!(body.message.contains("2265603-43"));
    }
}
