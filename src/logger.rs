use std::sync::Once;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug")] {
        const LOG_ENV: &str = "fieldwise=trace";
    } else {
        const LOG_ENV: &str = "fieldwise=info";
    }
}
static INIT: Once = Once::new();

/// Installs the logger once per process. `RUST_LOG` overrides the default
/// log spec.
pub fn init_logger() {
    INIT.call_once(|| {
        init();
    });
}

cfg_if! {
    if #[cfg(feature = "flexi_logger")] {
        use log::info;

        fn init() {
            match flexi_logger::Logger::try_with_env_or_str(LOG_ENV)
                .and_then(flexi_logger::Logger::start)
            {
                Ok(handle) => {
                    // logging stays active for the rest of the process
                    core::mem::forget(handle);
                    info!("Logger initialized! (Using flexi_logger) {LOG_ENV}");
                }
                Err(err) => eprintln!("Failed to initialize logger: {err}"),
            }
        }
    }

    else {
        fn init() {
            println!("No logger enabled. Logs for {LOG_ENV} will not be recorded.");
        }
    }
}
