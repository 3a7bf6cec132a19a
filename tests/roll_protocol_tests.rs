//! Tests for the roll request round trip

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use diceviz::dice3d::roll_client::*;
use diceviz::dice3d::types::*;

// ============================================================================
// Test services
// ============================================================================

/// Local rules, answered after a delay. Requests whose note is "slow" take
/// longer than the rest.
struct DelayedService {
    delay: Duration,
}

impl RollService for DelayedService {
    fn roll(&self, request: &RollRequest) -> Result<RollResponse, String> {
        let delay = if request.info == "slow" {
            self.delay * 6
        } else {
            self.delay
        };
        thread::sleep(delay);
        LocalRollService.roll(request)
    }

    fn describe(&self) -> String {
        "delayed".to_string()
    }
}

/// Fails the first call, then rolls normally.
#[derive(Default)]
struct FlakyService {
    calls: AtomicUsize,
}

impl RollService for FlakyService {
    fn roll(&self, request: &RollRequest) -> Result<RollResponse, String> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err("connection refused".to_string());
        }
        LocalRollService.roll(request)
    }

    fn describe(&self) -> String {
        "flaky".to_string()
    }
}

/// Panics on every call.
struct PanickingService;

impl RollService for PanickingService {
    fn roll(&self, _request: &RollRequest) -> Result<RollResponse, String> {
        panic!("service blew up");
    }

    fn describe(&self) -> String {
        "panicking".to_string()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn roll_app(service: Arc<dyn RollService>) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.insert_resource(RollAnimation::default());
    app.insert_resource(RollClient::new(service));
    app.insert_resource(RollDisplay::default());
    app.add_message::<RollRequested>();
    app.add_systems(
        Update,
        (dispatch_roll_requests, collect_roll_results, sync_roll_display).chain(),
    );
    app
}

fn request_roll(app: &mut App, die_type: DiceType, info: &str) {
    app.world_mut().write_message(RollRequested {
        die_type,
        info: info.to_string(),
    });
}

/// Run frames until no request is outstanding, then return the display.
fn settle(app: &mut App) -> RollDisplay {
    for _ in 0..1000 {
        app.update();
        if app.world().resource::<RollClient>().in_flight() == 0 {
            return app.world().resource::<RollDisplay>().clone();
        }
        thread::sleep(Duration::from_millis(2));
    }
    panic!("roll request never completed");
}

fn value_of(display: &RollDisplay) -> u32 {
    display
        .value_text
        .strip_prefix("Roll Result: ")
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| panic!("unexpected value text {:?}", display.value_text))
}

fn text_of<M: Component>(app: &mut App) -> String {
    let mut query = app.world_mut().query_filtered::<&Text, With<M>>();
    query.single(app.world()).unwrap().0.clone()
}

fn node_display<M: Component>(app: &mut App) -> Display {
    let mut query = app.world_mut().query_filtered::<&Node, With<M>>();
    query.single(app.world()).unwrap().display
}

fn spawn_panel(app: &mut App) {
    let world = app.world_mut();
    world.spawn((
        Node {
            display: Display::None,
            ..default()
        },
        ResultPanel,
    ));
    world.spawn((Text::new(""), ResultValueText));
    world.spawn((Text::new(""), ResultDieText));
    world.spawn((Text::new(""), ResultInfoText));
    world.spawn((Text::new(""), ResultErrorText));
    world.spawn((
        Node {
            display: Display::None,
            ..default()
        },
        RetrySlot,
    ));
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_d6_rolls_within_range() {
    let mut app = roll_app(Arc::new(LocalRollService));
    for _ in 0..50 {
        request_roll(&mut app, DiceType::D6, "");
        let display = settle(&mut app);
        assert!((1..=6).contains(&value_of(&display)));
        assert_eq!(display.die_text, "on a D6");
        assert_eq!(display.info_text, "");
    }
}

#[test]
fn test_d100_rolls_within_range() {
    let mut app = roll_app(Arc::new(LocalRollService));
    for _ in 0..50 {
        request_roll(&mut app, DiceType::D100, "");
        let display = settle(&mut app);
        assert!((1..=100).contains(&value_of(&display)));
        assert_eq!(display.die_text, "on a D100");
    }
}

#[test]
fn test_annotation_is_echoed_into_panel() {
    let mut app = roll_app(Arc::new(LocalRollService));
    spawn_panel(&mut app);

    request_roll(&mut app, DiceType::D20, "ambush");
    let display = settle(&mut app);
    assert_eq!(display.info_text, "Info: ambush");

    assert_eq!(node_display::<ResultPanel>(&mut app), Display::Flex);
    assert_eq!(text_of::<ResultInfoText>(&mut app), "Info: ambush");
    assert_eq!(text_of::<ResultDieText>(&mut app), "on a D20");
    assert!(text_of::<ResultValueText>(&mut app).starts_with("Roll Result: "));
    assert_eq!(node_display::<RetrySlot>(&mut app), Display::None);
}

#[test]
fn test_padded_annotation_is_echoed_verbatim() {
    let mut app = roll_app(Arc::new(LocalRollService));
    spawn_panel(&mut app);

    request_roll(&mut app, DiceType::D12, " ambush ");
    let display = settle(&mut app);
    assert_eq!(display.info_text, "Info:  ambush ");
    assert_eq!(text_of::<ResultInfoText>(&mut app), "Info:  ambush ");

    request_roll(&mut app, DiceType::D12, "   ");
    let display = settle(&mut app);
    assert_eq!(display.info_text, "Info:    ");
}

#[test]
fn test_roll_triggers_animation_immediately() {
    let mut app = roll_app(Arc::new(DelayedService {
        delay: Duration::from_millis(50),
    }));
    request_roll(&mut app, DiceType::D8, "");
    app.update();

    assert!(app.world().resource::<RollAnimation>().is_rolling());
    assert!(!app.world().resource::<RollDisplay>().visible);
    settle(&mut app);
}

#[test]
fn test_new_roll_hides_previous_result() {
    let mut app = roll_app(Arc::new(DelayedService {
        delay: Duration::from_millis(50),
    }));
    spawn_panel(&mut app);

    request_roll(&mut app, DiceType::D4, "");
    assert!(settle(&mut app).visible);

    request_roll(&mut app, DiceType::D4, "");
    app.update();
    assert!(!app.world().resource::<RollDisplay>().visible);
    assert_eq!(node_display::<ResultPanel>(&mut app), Display::None);
    settle(&mut app);
}

#[test]
fn test_stale_response_is_dropped() {
    let mut app = roll_app(Arc::new(DelayedService {
        delay: Duration::from_millis(20),
    }));

    request_roll(&mut app, DiceType::D6, "slow");
    app.update();
    request_roll(&mut app, DiceType::D20, "fast");
    let display = settle(&mut app);

    assert_eq!(display.die_text, "on a D20");
    assert_eq!(display.info_text, "Info: fast");
    assert_eq!(app.world().resource::<RollClient>().latest_generation(), 2);
}

// ============================================================================
// Failure path
// ============================================================================

#[test]
fn test_failure_shows_retry_and_retry_succeeds() {
    let mut app = roll_app(Arc::new(FlakyService::default()));
    spawn_panel(&mut app);

    request_roll(&mut app, DiceType::D12, "second wind");
    let display = settle(&mut app);
    assert!(display.visible);
    assert!(display.can_retry);
    assert!(display.error_text.contains("connection refused"));
    assert_eq!(node_display::<RetrySlot>(&mut app), Display::Flex);

    app.world_mut()
        .run_system_once(
            |time: Res<Time>,
             mut client: ResMut<RollClient>,
             mut display: ResMut<RollDisplay>,
             mut animation: ResMut<RollAnimation>| {
                retry_last_roll(&time, &mut client, &mut display, &mut animation);
            },
        )
        .unwrap();

    let display = settle(&mut app);
    assert!(!display.can_retry);
    assert!((1..=12).contains(&value_of(&display)));
    assert_eq!(display.info_text, "Info: second wind");
    assert_eq!(node_display::<RetrySlot>(&mut app), Display::None);
}

#[test]
fn test_panicking_service_reports_a_failure() {
    let mut app = roll_app(Arc::new(PanickingService));
    spawn_panel(&mut app);

    request_roll(&mut app, DiceType::D20, "");
    let display = settle(&mut app);

    assert!(display.visible);
    assert!(display.can_retry);
    assert!(display.error_text.starts_with("Roll failed: "));
    assert_eq!(node_display::<RetrySlot>(&mut app), Display::Flex);
}

#[test]
fn test_retry_before_any_roll_does_nothing() {
    let mut client = RollClient::new(Arc::new(LocalRollService));
    assert_eq!(client.retry(), None);
    assert_eq!(client.in_flight(), 0);
}

// ============================================================================
// HTTP
// ============================================================================

/// Serve one request on a local port, replying with `status` and `body`.
/// The raw request is sent back through the returned channel.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/roll", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        tx.send(String::from_utf8_lossy(&raw).to_string()).unwrap();
    });

    (url, rx)
}

#[test]
fn test_http_service_posts_form_and_parses_reply() {
    let (url, rx) = serve_once(
        "200 OK",
        r#"{"roll_result": 11, "die_type": "D20", "info": "ambush"}"#,
    );
    let service = HttpRollService::new(url, Duration::from_secs(5)).unwrap();

    let response = service
        .roll(&RollRequest::new(DiceType::D20, "ambush"))
        .unwrap();
    assert_eq!(response.roll_result, 11);
    assert_eq!(response.info, "ambush");

    let raw = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(raw.starts_with("POST /roll"));
    assert!(raw.contains("application/x-www-form-urlencoded"));
    assert!(raw.ends_with("type=D20&info=ambush"), "{raw}");
}

#[test]
fn test_http_error_status_is_a_failure() {
    let (url, _rx) = serve_once("500 Internal Server Error", "{}");
    let service = HttpRollService::new(url, Duration::from_secs(5)).unwrap();

    let err = service
        .roll(&RollRequest::new(DiceType::D6, ""))
        .unwrap_err();
    assert!(err.contains("500"), "{err}");
}
