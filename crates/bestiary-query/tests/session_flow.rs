use bestiary_model::{CreatureDataset, CreatureRecord};
use bestiary_query::{FilterDimension, SearchSession, SortDirection};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::advance;

fn snapshot() -> Arc<CreatureDataset> {
    let records = vec![
        record("Vulpix", "fire", 10),
        record("Ninetales", "fire", 30),
        record("Lapras", "water", 20),
    ];
    let bytes = serde_json::to_vec(&records).expect("serialize fixture");
    Arc::new(CreatureDataset::from_json_bytes(&bytes).expect("dataset"))
}

fn record(name: &str, primary_type: &str, poke_ball: u64) -> CreatureRecord {
    CreatureRecord {
        name: name.to_string(),
        sprite_id: 0,
        level: 1,
        primary_type: primary_type.to_string(),
        secondary_type: String::new(),
        primary_clan: String::new(),
        secondary_clan: String::new(),
        npc_price: 0,
        locations: String::new(),
        poke_ball,
        great_ball: 0,
        super_ball: 0,
        ultra_ball: 0,
        beast_ball_1: 0,
        beast_ball_2: 0,
        beast_ball_3: 0,
        beast_ball_4: 0,
        safari_ball: 0,
    }
}

#[tokio::test(start_paused = true)]
async fn typed_input_applies_after_the_quiet_period() {
    let mut session = SearchSession::new(snapshot(), Duration::from_millis(300));
    session.type_query("vul");
    session.type_query("vulp");

    let apply = async {
        session.apply_settled().await;
        session
    };
    let advance_clock = async {
        advance(Duration::from_millis(301)).await;
    };
    let (session, ()) = tokio::join!(apply, advance_clock);

    assert_eq!(session.state().query, "vulp");
    let page = session.current_page();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Vulpix");
}

#[tokio::test(start_paused = true)]
async fn dimension_switch_discards_pending_keystrokes() {
    let mut session = SearchSession::new(snapshot(), Duration::from_millis(300));
    session.type_query("lap");
    session.set_dimension(FilterDimension::Type);

    let apply = async {
        session.apply_settled().await;
        session
    };
    let advance_clock = async {
        advance(Duration::from_millis(301)).await;
    };
    let (session, ()) = tokio::join!(apply, advance_clock);

    assert!(session.state().query.is_empty());
    assert_eq!(session.current_page().total_matches, 3);
}

#[tokio::test(start_paused = true)]
async fn session_sort_and_paging_compose_with_search() {
    let mut session = SearchSession::new(snapshot(), Duration::from_millis(300));
    session.set_dimension(FilterDimension::Type);
    session.type_query("fire");

    let apply = async {
        session.apply_settled().await;
        session
    };
    let advance_clock = async {
        advance(Duration::from_millis(301)).await;
    };
    let (mut session, ()) = tokio::join!(apply, advance_clock);

    session.set_sort(SortDirection::Descending);
    session.set_per_page(1);
    assert_eq!(session.state().page, 1);

    let page = session.current_page();
    assert_eq!(page.total_matches, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items[0].name, "Ninetales");

    session.set_page(2);
    let page = session.current_page();
    assert_eq!(page.items[0].name, "Vulpix");
}
