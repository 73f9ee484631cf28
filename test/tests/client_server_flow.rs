use std::panic::AssertUnwindSafe;

use hotwire_client::{Client, ClientConfig};
use hotwire_server::{Server, ServerConfig};
use hotwire_shared::{
    CommandState, FnHandler, InputCommand, Key, KeyBinding, KeyCombo, PointerPosition,
};
use hotwire_test::{
    protocol, FailingSender, LocalCommandQueue, LocalSocketPair, Recorded, Recorder, TestUi,
};

fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// A Client connected to a local queue, with Fire on Mouse1 and Jump on Space (focusable)
fn client_and_link() -> (Client, LocalCommandQueue) {
    let mut client = Client::new(ClientConfig::default(), protocol()).unwrap();
    let fire = client.function("Fire").unwrap();
    let jump = client.function("Jump").unwrap();
    client.contexts_mut().root_mut().add_function(&fire).add_function(&jump);
    client
        .add_binding(KeyBinding::new(fire, KeyCombo::new(Key::Mouse1).unwrap()))
        .unwrap();
    client
        .add_binding(KeyBinding::new(jump, KeyCombo::new(Key::Space).unwrap()).can_focus(true))
        .unwrap();

    let link = LocalSocketPair::new();
    client.connect(link.sender);
    (client, link.queue)
}

#[test]
fn unhandled_transitions_reach_the_server() {
    init_logger();
    let (mut client, link) = client_and_link();
    let mut server = Server::new(ServerConfig::default(), protocol());
    let session = server.sessions().connect("player-1");
    let recorder = Recorder::new();
    let fire = server.function("Fire").unwrap();
    server.bind_function(&fire, recorder.handler(false));

    let pointer = PointerPosition::new(320.0, 240.0);
    client.set_target(Some(17));
    client.key_down(Key::Mouse1, pointer);
    client.key_up(Key::Mouse1, pointer);

    let payloads = link.drain();
    assert_eq!(payloads.len(), 2);

    let down = server.receive_command(session, &payloads[0]).unwrap();
    assert_eq!(down.command.sequence, 1);
    assert_eq!(down.command.pointer, pointer);
    assert_eq!(down.command.target, Some(17));
    assert_eq!(server.query_state(&session, &fire), CommandState::Down);

    server.receive_command(session, &payloads[1]).unwrap();
    assert_eq!(server.query_state(&session, &fire), CommandState::Up);
    assert_eq!(server.last_processed_sequence(&session), Some(2));

    assert_eq!(recorder.transitions(), vec!["Fire Down", "Fire Up"]);
    assert!(recorder.take().iter().all(|record| match record {
        Recorded::Enabled { session: seen, .. } | Recorded::Disabled { session: seen, .. } => {
            *seen == Some(session)
        }
        Recorded::Message { predicting, .. } => !predicting,
    }));
}

#[test]
fn consumed_transitions_stay_on_the_client() {
    init_logger();
    let (mut client, link) = client_and_link();
    let recorder = Recorder::new();
    let fire = client.function("Fire").unwrap();
    client.bind_function(&fire, recorder.handler(true));

    client.key_down(Key::Mouse1, PointerPosition::default());

    assert_eq!(recorder.transitions(), vec!["Fire Down"]);
    assert!(link.is_empty());
    assert_eq!(client.query_state(&fire), CommandState::Down);
    assert_eq!(client.next_sequence(), 1);
}

#[test]
fn focused_ui_swallows_focusable_transitions() {
    init_logger();
    let (mut client, link) = client_and_link();
    let ui = TestUi::new();
    client.set_ui(ui.clone());
    let recorder = Recorder::new();
    let jump = client.function("Jump").unwrap();
    client.bind_function(&jump, recorder.handler(false));

    ui.set_focused(true);
    client.key_down(Key::Space, PointerPosition::default());
    client.key_up(Key::Space, PointerPosition::default());
    assert_eq!(ui.offered().len(), 2);
    assert!(recorder.is_empty());
    assert!(link.is_empty());
    // predicted state follows the keys even when the UI has them
    assert_eq!(ui.changed().len(), 2);

    ui.set_focused(false);
    client.key_down(Key::Space, PointerPosition::default());
    assert_eq!(recorder.transitions(), vec!["Jump Down"]);
    assert_eq!(link.len(), 1);

    // Fire is not focusable and is never offered
    client.key_down(Key::Mouse1, PointerPosition::default());
    assert_eq!(ui.offered().len(), 3);
    assert_eq!(ui.changed().len(), 4);
}

#[test]
fn server_keeps_the_highest_sequence() {
    init_logger();
    let mut server = Server::new(ServerConfig::default(), protocol());
    let session = server.sessions().connect("player-2");
    let run = server.function("Run").unwrap();

    let five = InputCommand::new(run.clone(), CommandState::Down, 5)
        .encode(server.function_kinds())
        .unwrap();
    let three = InputCommand::new(run.clone(), CommandState::Up, 3)
        .encode(server.function_kinds())
        .unwrap();

    assert!(server.receive_command(session, &five).is_some());
    assert!(server.receive_command(session, &three).is_none());

    assert_eq!(server.last_processed_sequence(&session), Some(5));
    assert_eq!(server.query_state(&session, &run), CommandState::Down);
}

#[test]
fn echoed_commands_are_predicted_without_resending() {
    init_logger();
    let (mut client, link) = client_and_link();
    let config = ServerConfig {
        echo_applied_commands: true,
        ..Default::default()
    };
    let mut server = Server::new(config, protocol());
    let session = server.sessions().connect("player-3");

    let recorder = Recorder::new();
    let fire = client.function("Fire").unwrap();
    client.bind_function(&fire, recorder.handler(false));

    client.key_down(Key::Mouse1, PointerPosition::default());
    assert_eq!(recorder.transitions(), vec!["Fire Down"]);
    recorder.take();

    let payload = link.receive().unwrap();
    let echo = server
        .receive_command(session, &payload)
        .and_then(|receipt| receipt.echo)
        .unwrap();

    assert!(!client.receive_echo(&echo));
    assert_eq!(
        recorder.take(),
        vec![
            Recorded::Message {
                function: "Fire".to_string(),
                state: CommandState::Down,
                predicting: true,
            },
            Recorded::Enabled {
                function: "Fire".to_string(),
                predicting: true,
                session: None,
            },
        ]
    );
    assert!(link.is_empty());
    assert!(!client.is_predicting());
    assert_eq!(client.last_echoed_sequence(), 1);

    // the same echo again is stale
    assert!(!client.receive_echo(&echo));
    assert!(recorder.is_empty());
}

#[test]
fn prediction_flag_is_cleared_after_a_panicking_handler() {
    init_logger();
    let (mut client, link) = client_and_link();
    let fire = client.function("Fire").unwrap();
    let flag = client.prediction_flag();
    let seen = flag.clone();
    client.bind_function(
        &fire,
        FnHandler::new()
            .when_enabled(move |context| {
                assert!(context.predicting && seen.is_predicting());
                panic!("handler failed");
            })
            .into_ref(),
    );

    let command = InputCommand::new(fire, CommandState::Down, 1);
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| client.predict(&command)));

    assert!(result.is_err());
    assert!(!flag.is_predicting());
    assert!(link.is_empty());
}

#[test]
fn send_failures_do_not_interrupt_input() {
    init_logger();
    let mut client = Client::new(ClientConfig::default(), protocol()).unwrap();
    let fire = client.function("Fire").unwrap();
    client.contexts_mut().root_mut().add_function(&fire);
    client
        .add_binding(KeyBinding::new(fire.clone(), KeyCombo::new(Key::Mouse1).unwrap()))
        .unwrap();
    client.connect(FailingSender);

    client.key_down(Key::Mouse1, PointerPosition::default());
    client.key_up(Key::Mouse1, PointerPosition::default());

    assert_eq!(client.query_state(&fire), CommandState::Up);
    assert_eq!(client.next_sequence(), 3);
}

#[test]
fn forwarding_can_be_disabled() {
    let config = ClientConfig {
        forward_unhandled: false,
        ..Default::default()
    };
    let mut client = Client::new(config, protocol()).unwrap();
    let fire = client.function("Fire").unwrap();
    client.contexts_mut().root_mut().add_function(&fire);
    client
        .add_binding(KeyBinding::new(fire, KeyCombo::new(Key::Mouse1).unwrap()))
        .unwrap();
    let link = LocalSocketPair::new();
    client.connect(link.sender);

    client.key_down(Key::Mouse1, PointerPosition::default());

    assert!(link.queue.is_empty());
}
