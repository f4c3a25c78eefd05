use sandalwood_bot::config::parse_env_lines;

/// Defaults shipped inside the binary for targets without a `.env` file.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_env() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded {}", path.display()),
        Err(_) => apply_bundled_config(),
    }
}

#[cfg(target_arch = "wasm32")]
fn load_env() {
    apply_bundled_config();
}

fn apply_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Real environment wins over bundled values.
        if std::env::var_os(&key).is_some() {
            continue;
        }
        // SAFETY: runs first thing in main, before the runtime starts any threads.
        unsafe {
            std::env::set_var(&key, &value);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    // The platform may already have installed a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

fn main() {
    init_logging();
    load_env();
    dioxus::launch(sandalwood_bot::ui::App);
}
