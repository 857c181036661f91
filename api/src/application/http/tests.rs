use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::{
    application::{
        device_middleware::DEVICE_ID_HEADER,
        http::server::http_server::{router, state},
    },
    args::Args,
};

async fn test_server(upstream: &MockServer) -> TestServer {
    let uri = upstream.uri();
    let args = Args::parse_from([
        "recipehub",
        "--spoonacular-api-key",
        "test-key",
        "--spoonacular-base-url",
        uri.as_str(),
    ]);
    let app_state = state(Arc::new(args)).await.unwrap();

    TestServer::new(router(app_state).unwrap()).unwrap()
}

fn device(id: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(DEVICE_ID_HEADER),
        HeaderValue::from_static(id),
    )
}

async fn mount_search(upstream: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/recipes/findByIngredients"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 11, "usedIngredientCount": 2, "missedIngredientCount": 1 },
            { "id": 22, "usedIngredientCount": 1, "missedIngredientCount": 4 }
        ])))
        .mount(upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/recipes/informationBulk"))
        .and(query_param("ids", "11,22"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 22,
                "title": "Slow roast",
                "readyInMinutes": 240,
                "extendedIngredients": [{ "id": 1, "name": "beef", "amount": 1.0, "unit": "kg" }],
                "analyzedInstructions": [{ "name": "", "steps": [{ "number": 1, "step": "Roast." }] }]
            },
            {
                "id": 11,
                "title": "Egg fried rice",
                "readyInMinutes": 20,
                "nutrition": { "nutrients": [{ "name": "Calories", "amount": 380.0, "unit": "kcal" }] },
                "extendedIngredients": [
                    { "id": 1123, "name": "egg", "amount": 2.0, "unit": "" },
                    { "id": 20444, "name": "rice", "amount": 1.0, "unit": "cup" }
                ]
            }
        ])))
        .mount(upstream)
        .await;
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream).await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn search_returns_ranked_filtered_cards() {
    let upstream = MockServer::start().await;
    mount_search(&upstream).await;
    let server = test_server(&upstream).await;

    let response = server
        .post("/recipes/search")
        .json(&json!({
            "ingredients": [{ "id": "1123", "name": "egg" }, { "id": "20444", "name": "rice" }],
            "filters": { "timeToCook": "30 min or less" }
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], "11");
    assert_eq!(body["data"][0]["matchedIngredients"], 2);
    assert_eq!(body["data"][0]["difficulty"], "easy");
    assert_eq!(body["data"][0]["caloriesPerServing"], 380.0);
}

#[tokio::test]
async fn search_without_filters_uses_the_device_filters() {
    let upstream = MockServer::start().await;
    mount_search(&upstream).await;
    let server = test_server(&upstream).await;
    let (name, value) = device("phone");

    server
        .put("/pantry/filters")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "timeToCook": "1 hour or less" }))
        .await
        .assert_status_ok();

    let body = json!({ "ingredients": [{ "id": "1123", "name": "egg" }] });
    let phone = server
        .post("/recipes/search")
        .add_header(name, value)
        .json(&body)
        .await
        .json::<Value>();
    let other = server
        .post("/recipes/search")
        .json(&body)
        .await
        .json::<Value>();

    assert_eq!(phone["count"], 1);
    assert_eq!(other["count"], 2);
    assert_eq!(other["data"][0]["id"], "11");
}

#[tokio::test]
async fn search_without_ingredients_never_calls_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    let response = server
        .post("/recipes/search")
        .json(&json!({ "ingredients": [] }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 0);
}

#[tokio::test]
async fn upstream_failures_are_bad_gateway() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/findByIngredients"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    let response = server
        .post("/recipes/search")
        .json(&json!({ "ingredients": [{ "id": "1", "name": "egg" }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["code"], "E_UPSTREAM");
}

#[tokio::test]
async fn recipe_detail_maps_not_found() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/99/information"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    let missing = server.get("/recipes/99").await;
    let malformed = server.get("/recipes/pancakes").await;

    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<Value>()["status"], 404);
    assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recipe_detail_is_normalized() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/716429/information"))
        .and(query_param("includeNutrition", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 716429,
            "title": "Pasta with garlic",
            "readyInMinutes": 45,
            "servings": 2,
            "vegan": true,
            "dishTypes": ["lunch", "main course"],
            "extendedIngredients": [
                { "name": "garlic", "originalName": "fresh garlic", "image": "garlic.png", "amount": 2.0, "unit": "cloves" }
            ],
            "analyzedInstructions": [{ "name": "", "steps": [{ "number": 1, "step": "Boil pasta." }] }]
        })))
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    let response = server.get("/recipes/716429").await;

    response.assert_status_ok();
    let data = &response.json::<Value>()["data"];
    assert_eq!(data["prepTime"], 15);
    assert_eq!(data["cookTime"], 30);
    assert_eq!(data["dietaryInfo"]["isVegan"], true);
    assert_eq!(data["ingredients"][0]["id"], "ingredient-0");
    assert_eq!(data["ingredients"][0]["name"], "fresh garlic");
    assert_eq!(
        data["ingredients"][0]["imageUrl"],
        "https://spoonacular.com/cdn/ingredients_100x100/garlic.png"
    );
    assert_eq!(data["instructions"], json!(["Boil pasta."]));
    assert_eq!(data["tags"], json!(["lunch", "main course"]));
}

#[tokio::test]
async fn short_ingredient_queries_stay_local() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    let response = server
        .get("/ingredients/search")
        .add_query_param("query", "eg")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], json!([]));
}

#[tokio::test]
async fn barcode_lookup() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/food/products/upc/012345678905"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    let unknown = server.get("/ingredients/barcode/012345678905").await;
    let malformed = server.get("/ingredients/barcode/12ab").await;

    unknown.assert_status_ok();
    assert_eq!(unknown.json::<Value>()["data"], Value::Null);
    assert_eq!(malformed.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn pantry_ingredients_round_trip() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream).await;
    let (name, value) = device("phone");

    let added = server
        .post("/pantry/ingredients")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "type": "manual", "name": "  basil " }))
        .await;
    assert_eq!(added.status_code(), StatusCode::CREATED);
    let id = added.json::<Value>()["data"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(id.starts_with("manual-"));

    server
        .post("/pantry/ingredients")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "type": "known", "ingredient": { "id": "1123", "name": "egg" } }))
        .await
        .assert_status(StatusCode::CREATED);

    let listed = server
        .get("/pantry/ingredients")
        .add_header(name.clone(), value.clone())
        .await
        .json::<Value>();
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(2));

    let remaining = server
        .delete(&format!("/pantry/ingredients/{id}"))
        .add_header(name.clone(), value.clone())
        .await
        .json::<Value>();
    assert_eq!(remaining["data"], json!([{ "id": "1123", "name": "egg" }]));

    let other_device = server.get("/pantry/ingredients").await.json::<Value>();
    assert_eq!(other_device["data"], json!([]));
}

#[tokio::test]
async fn dietary_toggle_keeps_none_exclusive() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream).await;

    let defaults = server.get("/pantry/filters").await.json::<Value>();
    assert_eq!(defaults["data"]["dietaryPreferences"], json!(["none"]));
    assert_eq!(defaults["data"]["servings"], 2);

    let vegan = server
        .post("/pantry/filters/dietary/vegan")
        .await
        .json::<Value>();
    assert_eq!(vegan["data"]["dietaryPreferences"], json!(["vegan"]));

    let restored = server
        .post("/pantry/filters/dietary/vegan")
        .await
        .json::<Value>();
    assert_eq!(restored["data"]["dietaryPreferences"], json!(["none"]));
}

#[tokio::test]
async fn malformed_filters_are_rejected() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream).await;

    let response = server
        .put("/pantry/filters")
        .json(&json!({ "servings": 0 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");
}

#[tokio::test]
async fn saved_recipes_are_idempotent() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream).await;

    server.put("/pantry/saved-recipes/42").await.assert_status_ok();
    let saved = server
        .put("/pantry/saved-recipes/42")
        .await
        .json::<Value>();
    assert_eq!(saved["data"], json!(["42"]));

    let status = server.get("/pantry/saved-recipes/42").await.json::<Value>();
    assert_eq!(status, json!({ "recipeId": "42", "saved": true }));

    let removed = server
        .delete("/pantry/saved-recipes/42")
        .await
        .json::<Value>();
    assert_eq!(removed["data"], json!([]));
}

#[tokio::test]
async fn saving_a_non_numeric_recipe_id_is_rejected() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/informationBulk"))
        .and(query_param("ids", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "title": "Soup" }
        ])))
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    server.put("/pantry/saved-recipes/7").await.assert_status_ok();
    let rejected = server.put("/pantry/saved-recipes/abc").await;
    assert_eq!(rejected.status_code(), StatusCode::BAD_REQUEST);

    let details = server
        .get("/pantry/saved-recipes/details")
        .await;
    details.assert_status_ok();
    assert_eq!(details.json::<Value>()["data"][0]["name"], "Soup");
}

#[tokio::test]
async fn saved_recipe_details_use_one_bulk_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/informationBulk"))
        .and(query_param("ids", "7,8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "title": "Soup" },
            { "id": 8, "title": "Salad" }
        ])))
        .expect(1)
        .mount(&upstream)
        .await;
    let server = test_server(&upstream).await;

    server.put("/pantry/saved-recipes/7").await.assert_status_ok();
    server.put("/pantry/saved-recipes/8").await.assert_status_ok();
    let details = server
        .get("/pantry/saved-recipes/details")
        .await
        .json::<Value>();

    assert_eq!(details["data"][0]["name"], "Soup");
    assert_eq!(details["data"][1]["servings"], 1);
}

#[tokio::test]
async fn recent_searches_newest_first() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream).await;

    for query in ["egg", "rice", "egg"] {
        server
            .post("/pantry/recent-searches")
            .json(&json!({ "query": query }))
            .await
            .assert_status_ok();
    }
    let searches = server.get("/pantry/recent-searches").await.json::<Value>();
    assert_eq!(searches["data"], json!(["egg", "rice"]));

    server
        .delete("/pantry/recent-searches")
        .await
        .assert_status_ok();
    let cleared = server.get("/pantry/recent-searches").await.json::<Value>();
    assert_eq!(cleared["data"], json!([]));
}
