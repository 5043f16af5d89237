///////////////////////////////////////////////////////////////////////
// Profiles
///////////////////////////////////////////////////////////////////////

table! {
    profile (id) {
        id -> Text,
        email -> Text,
        display_name -> Text,
        handle -> Nullable<Text>,
        role -> SmallInt,
        is_active -> Bool,
        created_at -> BigInt,
    }
}

table! {
    profile_token (profile_id) {
        profile_id -> Text,
        nonce -> Text,
        expires_at -> BigInt,
    }
}

joinable!(profile_token -> profile (profile_id));

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    place (id) {
        id -> Text,
        slug -> Text,
        created_by -> Text,
        status -> SmallInt,
        title -> Text,
        summary -> Nullable<Text>,
        story -> Nullable<Text>,
        signature_move -> Nullable<Text>,
        best_time -> Nullable<Text>,
        warnings -> Nullable<Text>,
        area -> Nullable<Text>,
        categories -> Nullable<Text>,
        vibes -> Nullable<Text>,
        price -> Text,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        maps_url -> Text,
        apple_maps_url -> Nullable<Text>,
        instagram_url -> Nullable<Text>,
        website_url -> Nullable<Text>,
        phone -> Nullable<Text>,
        images -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
        submitted_at -> Nullable<BigInt>,
        approved_at -> Nullable<BigInt>,
    }
}

///////////////////////////////////////////////////////////////////////
// Votes
///////////////////////////////////////////////////////////////////////

table! {
    place_vote (place_id, voter_id) {
        place_id -> Text,
        voter_id -> Text,
        vote -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(place_vote -> place (place_id));
joinable!(place_vote -> profile (voter_id));
