use axum::http::StatusCode;
use serde_json::json;

mod utils;

use utils::*;

#[tokio::test]
async fn test_season_workflow_produces_standings_and_scorers() {
    let setup = TestSetupBuilder::new().build();

    let alice = setup.create_manager("Alice").await;
    let bruno = setup.create_manager("Bruno").await;
    setup.sign_player(&alice, "star-1").await;
    setup.sign_player(&bruno, "star-2").await;
    setup.sign_player(&bruno, "gold-1").await;

    let season = setup.create_season("league", "Spring Cup").await;

    let (status, first) = setup
        .record_result(
            &season,
            &alice,
            &bruno,
            [2, 1],
            json!([
                { "player": "star-1", "manager": alice, "count": 2 },
                { "player": "star-2", "manager": bruno, "count": 1 }
            ]),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "record failed: {}", first);
    assert_eq!(first["season_title"], "Spring Cup");
    assert_eq!(first["home_manager_name"], "Alice");

    let (status, _) = setup
        .record_result(
            &season,
            &bruno,
            &alice,
            [3, 0],
            json!([
                { "player": "star-2", "manager": bruno, "count": 2 },
                { "player": "gold-1", "manager": bruno, "count": 1 }
            ]),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(setup.result_repository.result_count(), 2);

    let (status, statistics) = setup.statistics(&season).await;
    assert_eq!(status, StatusCode::OK);

    // Level on points, Bruno ahead on goal difference
    let standing = statistics["standing"].as_array().unwrap();
    assert_eq!(standing.len(), 2);
    assert_eq!(standing[0]["manager"], "Bruno");
    assert_eq!(standing[0]["points"], 3);
    assert_eq!(standing[0]["goal_difference"], 2);
    assert_eq!(standing[0]["form"], json!(["L", "W"]));
    assert_eq!(standing[1]["manager"], "Alice");
    assert_eq!(standing[1]["goals_for"], 2);
    assert_eq!(standing[1]["goals_against"], 4);
    assert_eq!(standing[1]["form"], json!(["W", "L"]));

    let stats = statistics["stats"].as_array().unwrap();
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0]["player"], "Stern");
    assert_eq!(stats[0]["manager"], "Bruno");
    assert_eq!(stats[0]["count"], 3);
    assert_eq!(stats[1]["player"], "Estrella");
    assert_eq!(stats[1]["face_image_url"], "https://cdn.example/star-1.png");
    assert_eq!(stats[2]["player"], "Oro");

    let (status, seasons) = setup.get("/season").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seasons[0]["result_count"], 2);
    assert_eq!(seasons[0]["type"], "league");

    let (_, managers) = setup.get("/manager").await;
    for manager in managers.as_array().unwrap() {
        assert_eq!(manager["results"].as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_result_with_bad_score_is_rejected_before_storage() {
    let setup = TestSetupBuilder::new().build();
    let home = setup.create_manager("Home").await;
    let away = setup.create_manager("Away").await;
    let season = setup.create_season("cup", "Knockout").await;

    let (status, body) = setup
        .post(
            "/result",
            json!({ "season": season, "home": home, "away": away, "score": [1] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = setup
        .post(
            "/result",
            json!({ "season": season, "home": home, "away": away, "score": [4294967295u32, 0] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(setup.result_repository.result_count(), 0);

    let (status, statistics) = setup.statistics(&season).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(statistics["standing"], json!([]));
    assert_eq!(statistics["stats"], json!([]));
}

#[tokio::test]
async fn test_statistics_for_unknown_season() {
    let setup = TestSetupBuilder::new().build();

    let (status, body) = setup.statistics("does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_pack_spends_points_and_grows_roster() {
    let setup = TestSetupBuilder::new().build();
    let manager = setup.create_manager("Collector").await;
    setup.credit_points(&manager, 600).await;

    let (status, pack) = setup
        .post("/pack", json!({ "manager": manager, "type": 0 }))
        .await;
    assert_eq!(status, StatusCode::OK, "pack failed: {}", pack);
    assert_eq!(pack["point"], 100);
    let drawn = pack["player"]["id"].as_str().unwrap().to_string();
    assert!(drawn.starts_with("silver-"));

    let (_, managers) = setup.get("/manager").await;
    assert_eq!(managers[0]["players"][0]["id"], drawn);

    // 100 left, Silver costs 500
    let (status, body) = setup
        .post("/pack", json!({ "manager": manager, "type": 0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = setup
        .post("/pack", json!({ "manager": manager, "type": 9 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_spending_more_than_balance() {
    let setup = TestSetupBuilder::new().build();
    let manager = setup.create_manager("Saver").await;
    setup.credit_points(&manager, 300).await;

    let (status, body) = setup
        .post(
            "/manager/point",
            json!({ "manager": manager, "point": 301, "type": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "check your balance to process");

    let (status, body) = setup
        .post(
            "/manager/point",
            json!({ "manager": manager, "point": 300, "type": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"], 0);
}

#[tokio::test]
async fn test_random_draw_exhausts_pool_until_cache_clean() {
    let setup = TestSetupBuilder::new()
        .with_players(vec![
            catalog_player("a", "Alpha", 80),
            catalog_player("b", "Beta", 81),
        ])
        .build();
    let filter = json!({ "overall": [80, 81] });

    let (status, first) = setup.post("/player/random", filter.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["count"], 1);

    let (status, second) = setup.post("/player/random", filter.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["count"], 0);
    assert_ne!(first["players"][0]["id"], second["players"][0]["id"]);

    let (status, _) = setup.post("/player/random", filter.clone()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = setup.get("/cache/clean").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], 1);

    let (status, refreshed) = setup.post("/player/random", filter).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(refreshed["count"], 1);
}

#[tokio::test]
async fn test_top_players_listing_is_cached() {
    let setup = TestSetupBuilder::new().build();

    let (status, top) = setup.get("/player").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(top["count"], 3);
    assert_eq!(top["players"][0]["short_name"], "Idolo");
    assert!(setup.player_cache.has_key("players:top"));

    let (_, search) = setup
        .post("/player/search", json!({ "club": "integration" }))
        .await;
    assert_eq!(search["count"], 7);
}
