use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::{input, output},
    error::Error,
    service::{listing_service::ListingService, stock_service::StockService},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/tickets", get(show_tickets))
        .route(
            "/api/v1/tickets/regions/:region_name",
            get(get_ticket_by_region_name),
        )
        .route("/api/v1/tickets/stock", get(check_stock_ticket))
        .route("/api/v1/tickets/amount", get(inquiry_ticket_amount))
        .route(
            "/api/v1/tickets/stock/decrement",
            post(decrement_ticket_stock),
        )
        .route(
            "/api/v1/tickets/stock/increment",
            post(increment_ticket_stock),
        )
        .route_layer(application_middleware.auth.clone())
}

async fn show_tickets(
    State(listing_service): State<Arc<dyn ListingService>>,
    Extension(user): Extension<User>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<output::TicketsPage>, Error> {
    pagination.validate()?;

    let tickets_page = listing_service.show_tickets(pagination, user.id).await?;

    Ok(Json(tickets_page))
}

async fn get_ticket_by_region_name(
    State(listing_service): State<Arc<dyn ListingService>>,
    Path(region_name): Path<String>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = listing_service
        .get_ticket_by_region_name(&region_name)
        .await?;

    Ok(Json(tickets))
}

async fn check_stock_ticket(
    State(stock_service): State<Arc<dyn StockService>>,
    Query(check_stock_ticket): Query<input::CheckStockTicket>,
) -> Result<Json<output::StockTicket>, Error> {
    let stock_ticket = stock_service
        .check_stock_ticket(check_stock_ticket.ticket_detail_id)
        .await?;

    Ok(Json(stock_ticket))
}

async fn inquiry_ticket_amount(
    State(stock_service): State<Arc<dyn StockService>>,
    Query(inquiry): Query<input::InquiryTicketAmount>,
) -> Result<Json<output::InquiryTicketAmount>, Error> {
    inquiry.validate()?;

    let inquiry = stock_service
        .inquiry_ticket_amount(inquiry.ticket_id, inquiry.total_ticket)
        .await?;

    Ok(Json(inquiry))
}

async fn decrement_ticket_stock(
    State(stock_service): State<Arc<dyn StockService>>,
    Json(stock_ticket): Json<input::StockTicket>,
) -> Result<StatusCode, Error> {
    stock_ticket.validate()?;

    stock_service
        .decrement_ticket_stock(stock_ticket.ticket_detail_id, stock_ticket.total_tickets)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn increment_ticket_stock(
    State(stock_service): State<Arc<dyn StockService>>,
    Json(stock_ticket): Json<input::StockTicket>,
) -> Result<StatusCode, Error> {
    stock_ticket.validate()?;

    stock_service
        .increment_ticket_stock(stock_ticket.ticket_detail_id, stock_ticket.total_tickets)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        application::create_application,
        auth::{
            jwt_authorization_validator::test::{create_valid_jwt, SECRET},
            JwtAuthorizationValidator,
        },
        service::{listing_service::MockListingService, stock_service::MockStockService},
    };
    use axum::{
        body::Body,
        http::{header, Method, Request},
        response::Response,
    };
    use jsonwebtoken::{Algorithm, DecodingKey};
    use serde_json::{json, Value};
    use time::macros::datetime;
    use tower::ServiceExt;
    use tower_http::{trace::TraceLayer, validate_request::ValidateRequestHeaderLayer};

    fn application(stock_service: MockStockService, listing_service: MockListingService) -> Router {
        let application_state = ApplicationState {
            stock_service: Arc::new(stock_service),
            listing_service: Arc::new(listing_service),
        };
        let application_middleware = ApplicationMiddleware {
            auth: ValidateRequestHeaderLayer::custom(JwtAuthorizationValidator::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
            )),
            trace: TraceLayer::new_for_http(),
        };

        create_application(application_state, application_middleware)
    }

    async fn send(application: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", create_valid_jwt(2)),
            );
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        application.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_authorization_unauthorized() {
        let mut listing_service = MockListingService::new();
        listing_service.expect_show_tickets().never();
        let application = application(MockStockService::new(), listing_service);

        let request = Request::builder()
            .uri("/api/v1/tickets?page=1&size=10")
            .body(Body::empty())
            .unwrap();
        let response = application.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn show_tickets_ok() {
        let mut listing_service = MockListingService::new();
        listing_service
            .expect_show_tickets()
            .withf(|pagination, user_id| {
                pagination.page == 1 && pagination.size == 10 && *user_id == 2
            })
            .times(1)
            .returning(|pagination, _| {
                Ok(output::TicketsPage {
                    tickets: Vec::new(),
                    page: pagination.page,
                    size: pagination.size,
                    total_count: 0,
                    total_pages: 0,
                })
            });
        let application = application(MockStockService::new(), listing_service);

        let response = send(
            application,
            Method::GET,
            "/api/v1/tickets?page=1&size=10",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "tickets": [],
                "page": 1,
                "size": 10,
                "total_count": 0,
                "total_pages": 0,
            })
        );
    }

    #[tokio::test]
    async fn show_tickets_page_zero_unprocessable() {
        let mut listing_service = MockListingService::new();
        listing_service.expect_show_tickets().never();
        let application = application(MockStockService::new(), listing_service);

        let response = send(
            application,
            Method::GET,
            "/api/v1/tickets?page=0&size=10",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn show_tickets_profile_not_exist() {
        let mut listing_service = MockListingService::new();
        listing_service
            .expect_show_tickets()
            .returning(|_, _| Err(Error::ProfileNotExist));
        let application = application(MockStockService::new(), listing_service);

        let response = send(
            application,
            Method::GET,
            "/api/v1/tickets?page=1&size=10",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_ticket_by_region_name_ok() {
        let mut listing_service = MockListingService::new();
        listing_service
            .expect_get_ticket_by_region_name()
            .withf(|region_name| region_name == "exampleRegion")
            .times(1)
            .returning(|region_name| {
                Ok(vec![output::Ticket {
                    id: 1,
                    region: region_name.to_string(),
                    event_date: datetime!(2024-08-17 19:00 UTC),
                    level: "exampleLevel".to_string(),
                    price: 100.0,
                    stock: 10,
                    is_sold_out: false,
                    is_first_sold_out: false,
                }])
            });
        let application = application(MockStockService::new(), listing_service);

        let response = send(
            application,
            Method::GET,
            "/api/v1/tickets/regions/exampleRegion",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!([{
                "id": 1,
                "region": "exampleRegion",
                "event_date": "2024-08-17T19:00:00Z",
                "level": "exampleLevel",
                "price": 100.0,
                "stock": 10,
                "is_sold_out": false,
                "is_first_sold_out": false,
            }])
        );
    }

    #[tokio::test]
    async fn get_ticket_by_region_name_not_found() {
        let mut listing_service = MockListingService::new();
        listing_service
            .expect_get_ticket_by_region_name()
            .returning(|_| Err(Error::TicketNotExist));
        let application = application(MockStockService::new(), listing_service);

        let response = send(
            application,
            Method::GET,
            "/api/v1/tickets/regions/unknownRegion",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn check_stock_ticket_ok() {
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_check_stock_ticket()
            .withf(|ticket_detail_id| *ticket_detail_id == 3)
            .returning(|_| Ok(output::StockTicket { stock: 10 }));
        let application = application(stock_service, MockListingService::new());

        let response = send(
            application,
            Method::GET,
            "/api/v1/tickets/stock?ticket_detail_id=3",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "stock": 10 }));
    }

    #[tokio::test]
    async fn inquiry_ticket_amount_ok() {
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_inquiry_ticket_amount()
            .withf(|ticket_id, total_ticket| *ticket_id == 1 && *total_ticket == 5)
            .returning(|_, total_ticket| {
                Ok(output::InquiryTicketAmount {
                    total_ticket,
                    total_amount: 500.0,
                })
            });
        let application = application(stock_service, MockListingService::new());

        let response = send(
            application,
            Method::GET,
            "/api/v1/tickets/amount?ticket_id=1&total_ticket=5",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "total_ticket": 5, "total_amount": 500.0 })
        );
    }

    #[tokio::test]
    async fn decrement_ticket_stock_no_content() {
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_decrement_ticket_stock()
            .withf(|ticket_detail_id, amount| *ticket_detail_id == 3 && *amount == 5)
            .times(1)
            .returning(|_, _| Ok(()));
        let application = application(stock_service, MockListingService::new());

        let response = send(
            application,
            Method::POST,
            "/api/v1/tickets/stock/decrement",
            Some(json!({ "ticket_detail_id": 3, "total_tickets": 5 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn decrement_ticket_stock_not_enough_conflict() {
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_decrement_ticket_stock()
            .returning(|_, _| Err(Error::StockNotEnough));
        let application = application(stock_service, MockListingService::new());

        let response = send(
            application,
            Method::POST,
            "/api/v1/tickets/stock/decrement",
            Some(json!({ "ticket_detail_id": 3, "total_tickets": 15 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn increment_ticket_stock_no_content() {
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_increment_ticket_stock()
            .withf(|ticket_detail_id, amount| *ticket_detail_id == 3 && *amount == 5)
            .times(1)
            .returning(|_, _| Ok(()));
        let application = application(stock_service, MockListingService::new());

        let response = send(
            application,
            Method::POST,
            "/api/v1/tickets/stock/increment",
            Some(json!({ "ticket_detail_id": 3, "total_tickets": 5 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn increment_ticket_stock_zero_unprocessable() {
        let mut stock_service = MockStockService::new();
        stock_service.expect_increment_ticket_stock().never();
        let application = application(stock_service, MockListingService::new());

        let response = send(
            application,
            Method::POST,
            "/api/v1/tickets/stock/increment",
            Some(json!({ "ticket_detail_id": 3, "total_tickets": 0 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
