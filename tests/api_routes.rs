//! End-to-end tests of the HTTP API against a mocked statistics site.

use prop_scout::data_fetcher::api::current_season;
use prop_scout::data_fetcher::api::http_client::create_http_client_with_timeout;
use prop_scout::data_fetcher::{Roster, SiteClient};
use prop_scout::server::{AppState, create_routes};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use warp::http::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// (date, opponent, location cell, points, assists, rebounds)
type Row<'a> = (&'a str, &'a str, &'a str, u32, u32, u32);

fn game_log_page(rows: &[Row]) -> String {
    let rows: String = rows
        .iter()
        .map(|(date, opp, loc, pts, ast, trb)| {
            format!(
                r#"<tr>
                  <td data-stat="date_game">{date}</td>
                  <td data-stat="game_location">{loc}</td>
                  <td data-stat="opp_id">{opp}</td>
                  <td data-stat="game_result">W (+7)</td>
                  <td data-stat="mp">34:30</td>
                  <td data-stat="pts">{pts}</td>
                  <td data-stat="ast">{ast}</td>
                  <td data-stat="trb">{trb}</td>
                </tr>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="div_pgl_basic"><table>
             <thead><tr><th>Date</th></tr></thead>
             <tbody>{rows}</tbody>
           </table></div></body></html>"#
    )
}

fn routes(
    site_uri: String,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let client = create_http_client_with_timeout(5).unwrap();
    let state = AppState::new(
        SiteClient::with_client(client, site_uri, Duration::ZERO),
        Roster::builtin().clone(),
    );
    create_routes(Arc::new(state))
}

async fn mount_current_season(server: &MockServer, player_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/players/{player_path}/gamelog/{}",
            current_season()
        )))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_status_endpoint() {
    let server = MockServer::start().await;
    let response = warp::test::request()
        .method("GET")
        .path("/api/test")
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.body()), json!({"status": "API is working"}));
}

#[tokio::test]
async fn test_odds_endpoint_is_gone() {
    let server = MockServer::start().await;
    let response = warp::test::request()
        .method("POST")
        .path("/api/player/odds")
        .json(&json!({"playerName": "Trae Young"}))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::GONE);
    let body = body_json(response.body());
    assert_eq!(body["error"], "This endpoint has been deprecated");
    assert_eq!(body["message"], "Prop bet lines are now set manually by the user");
}

#[tokio::test]
async fn test_search_short_query_returns_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = warp::test::request()
        .method("GET")
        .path("/api/players/search?q=j")
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.body()), json!([]));

    let response = warp::test::request()
        .method("GET")
        .path("/api/players/search")
        .reply(&routes(server.uri()))
        .await;
    assert_eq!(body_json(response.body()), json!([]));
}

#[tokio::test]
async fn test_search_uses_roster_when_site_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/search.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let response = warp::test::request()
        .method("GET")
        .path("/api/players/search?q=curry")
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.body());
    assert_eq!(body[0]["id"], "curryst01");
    assert_eq!(body[0]["name"], "Stephen Curry");
    assert_eq!(body[0]["team"], "Golden State Warriors");
    assert_eq!(body[0]["position"], "PG");
}

#[tokio::test]
async fn test_analyze_requires_player_name() {
    let server = MockServer::start().await;
    let filter = routes(server.uri());

    for body in [json!({}), json!({"playerName": "   "})] {
        let response = warp::test::request()
            .method("POST")
            .path("/api/player/analyze")
            .json(&body)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response.body())["error"], "Player name is required");
    }
}

#[tokio::test]
async fn test_analyze_single_word_name_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .json(&json!({"playerName": "Giannis"}))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_rejects_zero_games_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .json(&json!({"playerName": "Trae Young", "gamesCount": 0}))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response.body())["error"],
        "gamesCount must be at least 1"
    );
}

#[tokio::test]
async fn test_analyze_rejects_unknown_location() {
    let server = MockServer::start().await;
    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .json(&json!({"playerName": "Trae Young", "location": "X"}))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_against_opponent() {
    let server = MockServer::start().await;
    let season = current_season();
    let d = |month_day: &str| format!("{}-{month_day}", season);
    let (d1, d2, d3, d4) = (d("01-05"), d("01-12"), d("02-02"), d("03-15"));
    mount_current_season(
        &server,
        "y/youngtr01",
        ResponseTemplate::new(200).set_body_string(game_log_page(&[
            (&d1, "BOS", "", 20, 10, 3),
            (&d2, "NYK", "@", 35, 12, 5),
            (&d3, "BOS", "@", 30, 8, 4),
            (&d4, "BOS", "", 25, 11, 2),
        ])),
    )
    .await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .json(&json!({
            "playerName": "Trae Young (ATL)",
            "opponent": "bos",
            "location": "ANY",
            "gamesCount": 2,
            "seasons": "current",
            "betLines": {"points": 26.5, "rebounds": 3.5, "assists": 9.5}
        }))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.body());
    assert_eq!(body["playerName"], "Trae Young");

    let logs = body["gameLogs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["date"], d4.as_str());
    assert_eq!(logs[0]["location"], "H");
    assert_eq!(logs[0]["result"], "W");
    assert_eq!(logs[0]["minutes"], 34.5);
    assert_eq!(logs[1]["date"], d3.as_str());
    assert_eq!(logs[1]["location"], "A");
    assert!(logs.iter().all(|log| log["opponent"] == "BOS"));

    let points = &body["stats"]["points"];
    assert_eq!(points["average"], 27.5);
    assert_eq!(points["min"], 25.0);
    assert_eq!(points["max"], 30.0);
    assert_eq!(points["overPercentage"], 50.0);
    assert_eq!(body["stats"]["rebounds"]["overPercentage"], 50.0);
    assert_eq!(body["stats"]["assists"]["overPercentage"], 50.0);
}

#[tokio::test]
async fn test_analyze_home_games_only() {
    let server = MockServer::start().await;
    let season = current_season();
    let (d1, d2) = (format!("{season}-01-05"), format!("{season}-01-12"));
    mount_current_season(
        &server,
        "y/youngtr01",
        ResponseTemplate::new(200).set_body_string(game_log_page(&[
            (&d1, "BOS", "", 20, 10, 3),
            (&d2, "NYK", "@", 35, 12, 5),
        ])),
    )
    .await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .json(&json!({"playerName": "Trae Young", "location": "h"}))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let logs = body_json(response.body())["gameLogs"].clone();
    assert_eq!(logs.as_array().unwrap().len(), 1);
    assert_eq!(logs[0]["opponent"], "BOS");
}

#[tokio::test]
async fn test_analyze_without_games_against_opponent() {
    let server = MockServer::start().await;
    let date = format!("{}-01-05", current_season());
    mount_current_season(
        &server,
        "y/youngtr01",
        ResponseTemplate::new(200)
            .set_body_string(game_log_page(&[(&date, "NYK", "", 20, 10, 3)])),
    )
    .await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .json(&json!({"playerName": "Trae Young", "opponent": "BOS"}))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response.body())["error"].clone();
    assert!(error.as_str().unwrap().contains("against BOS"));
}

#[tokio::test]
async fn test_analyze_with_unreachable_site() {
    let server = MockServer::start().await;
    mount_current_season(&server, "y/youngtr01", ResponseTemplate::new(500)).await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .json(&json!({"playerName": "Trae Young"}))
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_and_unknown_route() {
    let server = MockServer::start().await;
    let filter = routes(server.uri());

    let response = warp::test::request()
        .method("POST")
        .path("/api/player/analyze")
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = warp::test::request()
        .method("GET")
        .path("/api/unknown")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = MockServer::start().await;
    let response = warp::test::request()
        .method("OPTIONS")
        .path("/api/player/analyze")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .reply(&routes(server.uri()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
