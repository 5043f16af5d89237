use rocket::{
    config::Config as RocketCfg,
    http::{ContentType, Cookie, Status as HttpStatus},
    local::blocking::Client,
};

use super::{guards::COOKIE_PROFILE_KEY, sqlite, Cfg, InstanceOptions};
use barhop_core::{entities::*, repositories::ProfileRepo as _};

struct DummyNotifyGW;

impl barhop_core::gateways::notify::NotificationGateway for DummyNotifyGW {
    fn member_invited(&self, _: &Profile, _: &str) {}
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<rocket::Route>)>,
) -> (Client, sqlite::Connections) {
    let pool = barhop_db_sqlite::Connections::init(":memory:", 1).unwrap();
    barhop_db_sqlite::run_embedded_database_migrations(pool.exclusive().unwrap());
    let cfg = Cfg {
        invite_base_url: "http://localhost:8000".into(),
    };
    let options = InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
    };
    let db: sqlite::Connections = pool.into();
    let instance = super::rocket_instance(options, db.clone(), Box::new(DummyNotifyGW));
    let client = Client::tracked(instance).unwrap();
    (client, db)
}

pub fn register_member(db: &sqlite::Connections, id: &str, role: Role) {
    let profile = Profile {
        id: id.into(),
        email: EmailAddress::new_unchecked(format!("{id}@bar.tld")),
        display_name: id.to_string(),
        handle: None,
        role,
        is_active: true,
        created_at: Timestamp::now(),
    };
    db.exclusive().unwrap().create_profile(&profile).unwrap();
}

fn session_cookie(profile_id: &str) -> Cookie<'static> {
    Cookie::new(COOKIE_PROFILE_KEY, profile_id.to_string())
}

fn setup() -> (Client, sqlite::Connections) {
    rocket_test_setup(super::mounts())
}

const COMPLETE_FIELDS: &str = "title=Neon%20Garden&area=Old%20Harbor&categories=cocktail\
&vibes=lush%2Cquiet&summary=Courtyard%20bar&story=Long%20story&signature_move=Jasmine%20sour\
&best_time=Weeknights&maps_url=https%3A%2F%2Fmaps.example%2Fx&lat=54.35&lng=18.65";

fn created_place_id(location: &str) -> String {
    // Location looks like "/places/<id>/edit"
    location
        .trim_start_matches("/places/")
        .trim_end_matches("/edit")
        .to_string()
}

#[test]
fn vote_without_login_is_redirected() {
    let (client, _) = setup();
    let res = client
        .post("/places/some-place/vote")
        .header(ContentType::Form)
        .body("vote=yes")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/review"));
}

#[test]
fn save_draft_then_submit_then_approve_by_quorum() {
    let (client, db) = setup();
    register_member(&db, "owner", Role::Bartender);

    // An incomplete draft can be saved.
    let res = client
        .post("/places")
        .header(ContentType::Form)
        .private_cookie(session_cookie("owner"))
        .body("intent=save&title=Neon%20Garden")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    let location = res.headers().get_one("Location").unwrap().to_string();
    let place_id = created_place_id(&location);
    assert!(!place_id.is_empty());

    // Submitting the incomplete draft bounces back to the edit page.
    let res = client
        .post("/places")
        .header(ContentType::Form)
        .private_cookie(session_cookie("owner"))
        .body(format!(
            "intent=submit&place_id={place_id}&title=Neon%20Garden"
        ))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    assert_eq!(
        res.headers().get_one("Location"),
        Some(format!("/places/{place_id}/edit").as_str())
    );

    // A complete submission lands on the dashboard.
    let res = client
        .post("/places")
        .header(ContentType::Form)
        .private_cookie(session_cookie("owner"))
        .body(format!(
            "intent=submit&place_id={place_id}&{COMPLETE_FIELDS}"
        ))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/dashboard"));

    // Nothing is published yet.
    let res = client.get("/api/places").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let public: serde_json::Value = res.into_json().unwrap();
    assert_eq!(0, public.as_array().unwrap().len());

    // Three members vote yes; the third vote publishes the place.
    for voter in ["v1", "v2", "v3"] {
        register_member(&db, voter, Role::Bartender);
        let res = client
            .post(format!("/places/{place_id}/vote"))
            .header(ContentType::Form)
            .private_cookie(session_cookie(voter))
            .body("vote=yes")
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/review"));
    }

    let res = client.get("/api/places").dispatch();
    let public: serde_json::Value = res.into_json().unwrap();
    let places = public.as_array().unwrap();
    assert_eq!(1, places.len());
    assert_eq!("approved", places[0]["status"]);
    assert_eq!("neon-garden", places[0]["slug"]);

    let res = client.get("/api/places/neon-garden").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
}

#[test]
fn inactive_member_cannot_save() {
    let (client, db) = setup();
    register_member(&db, "ghost", Role::Bartender);
    {
        let conn = db.exclusive().unwrap();
        let mut profile = conn.get_profile("ghost").unwrap();
        profile.is_active = false;
        conn.update_profile(&profile).unwrap();
    }
    let res = client
        .post("/places")
        .header(ContentType::Form)
        .private_cookie(session_cookie("ghost"))
        .body("intent=save&title=Neon%20Garden")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    // Bounced back instead of creating the draft.
    let res = client.get("/api/places").dispatch();
    let public: serde_json::Value = res.into_json().unwrap();
    assert_eq!(0, public.as_array().unwrap().len());
}

#[test]
fn admin_override_and_member_listing() {
    let (client, db) = setup();
    register_member(&db, "owner", Role::Bartender);
    register_member(&db, "boss", Role::Admin);

    let res = client
        .post("/places")
        .header(ContentType::Form)
        .private_cookie(session_cookie("owner"))
        .body("intent=save&title=Neon%20Garden")
        .dispatch();
    let location = res.headers().get_one("Location").unwrap().to_string();
    let place_id = created_place_id(&location);

    // A bartender cannot force a status.
    let res = client
        .post(format!("/places/{place_id}/status"))
        .header(ContentType::Form)
        .private_cookie(session_cookie("owner"))
        .body("status=approved")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    let res = client.get("/api/places").dispatch();
    let public: serde_json::Value = res.into_json().unwrap();
    assert_eq!(0, public.as_array().unwrap().len());

    // An admin can.
    let res = client
        .post(format!("/places/{place_id}/status"))
        .header(ContentType::Form)
        .private_cookie(session_cookie("boss"))
        .body("status=approved")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    let res = client.get("/api/places").dispatch();
    let public: serde_json::Value = res.into_json().unwrap();
    assert_eq!(1, public.as_array().unwrap().len());

    // The member listing is admin-only.
    let res = client
        .get("/api/members")
        .private_cookie(session_cookie("owner"))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::Forbidden);
    let res = client
        .get("/api/members")
        .private_cookie(session_cookie("boss"))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let members: serde_json::Value = res.into_json().unwrap();
    assert_eq!(2, members.as_array().unwrap().len());
}

#[test]
fn invite_link_establishes_a_session() {
    let (client, db) = setup();
    register_member(&db, "boss", Role::Admin);

    let admin = barhop_core::usecases::ActorContext {
        profile_id: "boss".into(),
        role: Role::Admin,
    };
    let invitation = barhop_application::prelude::invite_member(
        &db,
        &DummyNotifyGW,
        &admin,
        barhop_core::usecases::NewMember {
            email: EmailAddress::new_unchecked("sam@bar.tld".into()),
            display_name: Some("Sam".into()),
            handle: None,
            role: Role::Bartender,
            is_active: true,
        },
        "http://localhost:8000",
    )
    .unwrap();

    let token = invitation
        .invite_link
        .rsplit_once("token=")
        .map(|(_, token)| token.to_string())
        .unwrap();
    let res = client
        .get(format!("/invites/accept?token={token}"))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/dashboard"));

    // The tracked client keeps the session cookie: the invited member
    // can save a draft without further ceremony.
    let res = client
        .post("/places")
        .header(ContentType::Form)
        .body("intent=save&title=After%20Hours")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    let location = res.headers().get_one("Location").unwrap();
    assert!(location.starts_with("/places/"));
}
