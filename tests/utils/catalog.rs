use fut_manager::player::models::Player;

/// Catalog entry with a predictable club, league and face URL
pub fn catalog_player(id: &str, name: &str, overall: u32) -> Player {
    Player {
        id: id.to_string(),
        long_name: format!("{} Long", name),
        name: name.to_string(),
        positions: "CM".to_string(),
        club: "Integration FC".to_string(),
        league: "Test League".to_string(),
        nationality: "Testland".to_string(),
        age: 27,
        overall,
        potential: overall,
        face_url: format!("https://cdn.example/{}.png", id),
        ..Player::default()
    }
}

/// A small catalog spanning the pack tiers and the top players window
pub fn default_catalog() -> Vec<Player> {
    vec![
        catalog_player("silver-1", "Silva", 66),
        catalog_player("silver-2", "Prata", 68),
        catalog_player("gold-1", "Oro", 77),
        catalog_player("gold-2", "Gull", 79),
        catalog_player("star-1", "Estrella", 88),
        catalog_player("star-2", "Stern", 91),
        catalog_player("icon-1", "Idolo", 97),
    ]
}
