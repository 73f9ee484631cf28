use hotwire_client::{Client, ClientConfig};
use hotwire_shared::{CommandState, Key, KeyBinding, KeyCombo, PointerPosition};
use hotwire_test::{protocol, Recorder, FUNCTIONS};

const P: PointerPosition = PointerPosition { x: 0.0, y: 0.0 };

fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// A Client whose root context allows every test function, with a recording
/// handler bound to each of them
fn client_with_recorder() -> (Client, Recorder) {
    let mut client = Client::new(ClientConfig::default(), protocol()).unwrap();
    let recorder = Recorder::new();
    for name in FUNCTIONS {
        let function = client.function(name).unwrap();
        client.contexts_mut().root_mut().add_function(&function);
        client.bind_function(&function, recorder.handler(true));
    }
    (client, recorder)
}

fn bind(client: &mut Client, name: &str, base: Key, modifiers: &[Key]) {
    let function = client.function(name).unwrap();
    let combo = KeyCombo::with_modifiers(base, modifiers).unwrap();
    client.add_binding(KeyBinding::new(function, combo)).unwrap();
}

#[test]
fn shift_w_runs_without_moving_up() {
    init_logger();
    let (mut client, recorder) = client_with_recorder();
    bind(&mut client, "MoveUp", Key::W, &[]);
    bind(&mut client, "Run", Key::W, &[Key::Shift]);
    let run = client.function("Run").unwrap();
    let move_up = client.function("MoveUp").unwrap();

    client.key_down(Key::Shift, P);
    assert!(recorder.is_empty());

    client.key_down(Key::W, P);
    assert_eq!(recorder.transitions(), vec!["Run Down"]);
    assert_eq!(client.query_state(&run), CommandState::Down);
    assert_eq!(client.query_state(&move_up), CommandState::Up);

    client.key_up(Key::W, P);
    assert_eq!(recorder.transitions(), vec!["Run Down", "Run Up"]);

    client.key_up(Key::Shift, P);
    assert_eq!(recorder.transitions(), vec!["Run Down", "Run Up"]);
    assert_eq!(client.query_state(&run), CommandState::Up);
}

#[test]
fn pressing_shift_late_releases_the_shadowed_binding_once() {
    init_logger();
    let (mut client, recorder) = client_with_recorder();
    bind(&mut client, "MoveUp", Key::W, &[]);
    bind(&mut client, "Run", Key::W, &[Key::Shift]);

    client.key_down(Key::W, P);
    client.key_down(Key::Shift, P);
    client.key_up(Key::W, P);
    client.key_up(Key::Shift, P);

    assert_eq!(
        recorder.transitions(),
        vec!["MoveUp Down", "Run Down", "MoveUp Up", "Run Up"]
    );
}

#[test]
fn toggle_latches_until_pressed_again() {
    init_logger();
    let (mut client, recorder) = client_with_recorder();
    let crouch = client.function("Crouch").unwrap();
    client
        .add_binding(KeyBinding::new(crouch.clone(), KeyCombo::new(Key::C).unwrap()).toggle())
        .unwrap();

    client.key_down(Key::C, P);
    client.key_up(Key::C, P);
    assert_eq!(client.query_state(&crouch), CommandState::Down);

    client.key_down(Key::C, P);
    client.key_up(Key::C, P);
    assert_eq!(recorder.transitions(), vec!["Crouch Down", "Crouch Up"]);
    assert_eq!(client.query_state(&crouch), CommandState::Up);
}

#[test]
fn switching_context_releases_functions_it_does_not_allow() {
    init_logger();
    let mut client = Client::new(ClientConfig::default(), protocol()).unwrap();
    let recorder = Recorder::new();
    let fire = client.function("Fire").unwrap();
    let open_menu = client.function("OpenMenu").unwrap();
    client.bind_function(&fire, recorder.handler(true));
    client.bind_function(&open_menu, recorder.handler(true));

    client
        .contexts_mut()
        .create("gameplay", "default")
        .unwrap()
        .add_function(&fire);
    client.contexts_mut().root_mut().add_function(&open_menu);
    client.contexts_mut().create("menu", "default").unwrap();

    client
        .add_binding(KeyBinding::new(fire.clone(), KeyCombo::new(Key::Mouse1).unwrap()))
        .unwrap();
    client
        .add_binding(KeyBinding::new(open_menu.clone(), KeyCombo::new(Key::Escape).unwrap()))
        .unwrap();

    client.set_active_context("gameplay").unwrap();
    client.key_down(Key::Mouse1, P);
    client.key_down(Key::Escape, P);
    assert_eq!(recorder.transitions(), vec!["Fire Down", "OpenMenu Down"]);

    client.set_active_context("menu").unwrap();
    assert_eq!(
        recorder.transitions(),
        vec!["Fire Down", "OpenMenu Down", "Fire Up"]
    );
    assert_eq!(client.query_state(&fire), CommandState::Up);
    // the root context still allows OpenMenu
    assert_eq!(client.query_state(&open_menu), CommandState::Down);

    // Fire stays inert in the menu
    client.key_up(Key::Mouse1, P);
    client.key_down(Key::Mouse1, P);
    assert_eq!(recorder.len(), 3);
}

#[test]
fn unknown_context_is_an_error() {
    let (mut client, _) = client_with_recorder();

    assert!(client.set_active_context("cutscene").is_err());
    assert_eq!(client.active_context(), "default");
}

#[test]
fn losing_focus_releases_everything() {
    init_logger();
    let (mut client, recorder) = client_with_recorder();
    bind(&mut client, "MoveUp", Key::W, &[]);
    bind(&mut client, "Jump", Key::Space, &[]);

    client.key_down(Key::W, P);
    client.key_down(Key::Space, P);
    client.release_all();

    assert_eq!(
        recorder.transitions(),
        vec!["MoveUp Down", "Jump Down", "MoveUp Up", "Jump Up"]
    );
    assert!(!client.bindings().is_pressed(Key::W));
}

#[test]
fn run_bound_twice_stays_down_when_shift_joins() {
    init_logger();
    let (mut client, recorder) = client_with_recorder();
    bind(&mut client, "Run", Key::W, &[]);
    bind(&mut client, "Run", Key::W, &[Key::Shift]);
    let run = client.function("Run").unwrap();

    client.key_down(Key::W, P);
    client.key_down(Key::Shift, P);
    assert_eq!(recorder.transitions(), vec!["Run Down"]);
    assert_eq!(client.query_state(&run), CommandState::Down);

    client.key_up(Key::W, P);
    assert_eq!(recorder.transitions(), vec!["Run Down", "Run Up"]);
    assert_eq!(client.query_state(&run), CommandState::Up);
}

#[test]
fn toggle_pressed_twice_without_release_goes_up() {
    init_logger();
    let (mut client, recorder) = client_with_recorder();
    let crouch = client.function("Crouch").unwrap();
    client
        .add_binding(KeyBinding::new(crouch.clone(), KeyCombo::new(Key::C).unwrap()).toggle())
        .unwrap();

    client.key_down(Key::C, P);
    client.key_down(Key::C, P);

    assert_eq!(recorder.transitions(), vec!["Crouch Down", "Crouch Up"]);
    assert_eq!(client.query_state(&crouch), CommandState::Up);
}
