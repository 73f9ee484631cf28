/// Function set shared by the integration tests
use hotwire_shared::Protocol;

pub const FUNCTIONS: [&str; 7] = [
    "MoveUp", "MoveDown", "Run", "Jump", "Fire", "Crouch", "OpenMenu",
];

pub fn protocol() -> Protocol {
    Protocol::builder().add_functions(FUNCTIONS).build()
}
