pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub fn config_read_error(path: &str) -> String {
    format!("Failed to read {path}")
}

pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";

pub const STARTING: &str = "Starting BMI bot...";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const SHUTDOWN: &str = "Shutting down...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub const JOIN_INVITE_SUCCESS: &str = "✅ Successfully joined room!";

pub fn route_failed(err: &str) -> String {
    format!("Failed to route message: {err}")
}

pub fn gender_of(sender: &str, gender: &str) -> String {
    format!("Gender of {sender}: {gender}")
}

pub fn weight_of(sender: &str, weight: f64) -> String {
    format!("Weight of {sender}: {weight}")
}

pub fn height_of(sender: &str, height: f64) -> String {
    format!("Height of {sender}: {height}")
}

pub fn bmi_of(sender: &str, gender: &str, bmi: f64) -> String {
    format!("BMI of {sender} ({gender}): {bmi}")
}

pub fn cancelled_by(sender: &str) -> String {
    format!("User {sender} canceled the conversation.")
}

pub fn rejected_input(sender: &str, err: &str) -> String {
    format!("Rejected input from {sender}: {err}")
}

pub fn evicted_idle(count: usize) -> String {
    format!("Dropped {count} idle conversation(s)")
}
