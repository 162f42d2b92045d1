use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use chrono::Utc;
use rb_api::{configure_routes, AppState};
use rb_core::models::Post;
use rb_core::pager::Pager;
use rb_core::query::Search;
use rb_core::service::BoardService;
use rb_core::traits::BoardStore;
use rb_db_sqlite::SqliteBoardStore;

async fn seeded_store(count: i64) -> Arc<SqliteBoardStore> {
    let store = SqliteBoardStore::in_memory().await.unwrap();
    for num in 1..=count {
        store
            .insert(Post {
                num,
                name: "seed".into(),
                subject: format!("subject {}", num),
                content: format!("line one of {}\r\nline two", num),
                ip_addr: "127.0.0.1".into(),
                hit_count: 0,
                created: Utc::now(),
            })
            .await
            .unwrap();
    }
    Arc::new(store)
}

fn state(store: Arc<SqliteBoardStore>) -> web::Data<AppState> {
    web::Data::new(AppState::new(BoardService::new(store, Pager::default())))
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(state($store.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn home_and_create_form_render() {
    let store = seeded_store(0).await;
    let app = app!(store);

    for uri in ["/", "/created.action"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    }
}

#[actix_web::test]
async fn list_clamps_page_past_the_end() {
    let store = seeded_store(12).await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/list.action?pageNum=5").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    assert!(html.contains("page 3 of 3"));
    assert!(html.contains(">subject 2</a>"));
    assert!(html.contains(">subject 1</a>"));
    assert!(!html.contains(">subject 12</a>"));
}

#[actix_web::test]
async fn list_filters_by_search() {
    let store = seeded_store(12).await;
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri("/list.action?searchKey=subject&searchValue=subject%201")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    // subject 1, 10, 11, 12
    assert!(html.contains("4 posts, page 1 of 1"));
    assert!(!html.contains(">subject 2</a>"));
}

#[actix_web::test]
async fn malformed_page_number_is_a_bad_request() {
    let store = seeded_store(1).await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/list.action?pageNum=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/article.action?num=x&pageNum=1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_assigns_next_number_and_client_ip() {
    let store = seeded_store(3).await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/created_ok.action")
        .peer_addr("10.1.2.3:5555".parse().unwrap())
        .set_form([("name", "kim"), ("subject", "new post"), ("content", "hello\r\nworld")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/list.action");

    let post = store.fetch_by_id(4).await.unwrap().expect("post 4 stored");
    assert_eq!(post.subject, "new post");
    assert_eq!(post.ip_addr, "10.1.2.3");
    assert_eq!(post.hit_count, 0);
}

#[actix_web::test]
async fn reading_counts_each_hit() {
    let store = seeded_store(2).await;
    let app = app!(store);

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/article.action?num=2&pageNum=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let post = store.fetch_by_id(2).await.unwrap().unwrap();
    assert_eq!(post.hit_count, 2);
}

#[actix_web::test]
async fn missing_article_redirects_to_list_page() {
    let store = seeded_store(2).await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/article.action?num=99&pageNum=2").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/list.action?pageNum=2");
}

#[actix_web::test]
async fn edit_form_for_missing_post_redirects() {
    let store = seeded_store(1).await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/updated.action?num=50&pageNum=1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/list.action?pageNum=1");
}

#[actix_web::test]
async fn update_keeps_list_position_and_search() {
    let store = seeded_store(1).await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/updated_ok.action")
        .set_form([
            ("num", "1"),
            ("name", "editor"),
            ("subject", "edited"),
            ("content", "a<br/>b"),
            ("pageNum", "2"),
            ("searchKey", "subject"),
            ("searchValue", "foo%20bar"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        "/list.action?pageNum=2&searchKey=subject&searchValue=foo%20bar"
    );

    let post = store.fetch_by_id(1).await.unwrap().unwrap();
    assert_eq!(post.subject, "edited");
    assert_eq!(post.content, "a\r\nb");
}

#[actix_web::test]
async fn deleting_missing_post_still_redirects() {
    let store = seeded_store(1).await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/deleted_ok.action?num=404&pageNum=1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/list.action?pageNum=1");
    assert_eq!(store.count(&Search::default()).await.unwrap(), 1);
}

#[actix_web::test]
async fn delete_preserves_encoded_search() {
    let store = seeded_store(3).await;
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri("/deleted_ok.action?num=3&pageNum=1&searchKey=content&searchValue=line%20one")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        location(&resp),
        "/list.action?pageNum=1&searchKey=content&searchValue=line%20one"
    );
    assert!(store.fetch_by_id(3).await.unwrap().is_none());
}
