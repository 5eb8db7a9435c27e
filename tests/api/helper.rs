use cerberus_status::telemetry;
use once_cell::sync::Lazy;

// 设置`TEST_LOG`时输出日志，否则丢弃
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_subscriber(telemetry::get_subscriber("test", "debug", std::io::stdout));
    } else {
        telemetry::init_subscriber(telemetry::get_subscriber("test", "debug", std::io::sink));
    }
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}
