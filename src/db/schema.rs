diesel::table! {
    players (id) {
        id -> Integer,
        name -> Text,
        wins -> Integer,
        losses -> Integer,
    }
}

diesel::table! {
    game_results (id) {
        id -> Integer,
        player1 -> Text,
        player2 -> Text,
        winner -> Text,
        played_at -> Timestamp,
    }
}
