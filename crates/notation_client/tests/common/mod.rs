#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use notation_client::{
    CallRecord, CallSink, ClientSettings, NotationManager, ReqwestTransport, ScoreCatalog, Session,
};
use wiremock::MockServer;

pub const TOKEN: &str = "tok-123";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(notation_logging::initialize_for_tests);
}

#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<CallRecord>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<CallRecord> {
        self.records.lock().unwrap().drain(..).collect()
    }
}

impl CallSink for RecordingSink {
    fn record(&self, record: &CallRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

pub fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings::new(server.uri(), TOKEN)
}

pub fn session_for(server: &MockServer) -> (Session, Arc<RecordingSink>) {
    init_logging();
    let settings = settings_for(server);
    let transport = Arc::new(ReqwestTransport::new(&settings).unwrap());
    let sink = Arc::new(RecordingSink::default());
    let session = Session::with_parts(settings, transport, sink.clone()).unwrap();
    (session, sink)
}

pub fn manager_for(server: &MockServer) -> NotationManager {
    NotationManager::new(session_for(server).0)
}

pub fn catalog_for(server: &MockServer) -> ScoreCatalog {
    ScoreCatalog::new(session_for(server).0)
}

pub fn cookie() -> String {
    format!("sesn={TOKEN}")
}

pub const CREATE_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<body class="header-link-page">
<header class="header header-app">
    <div class="show-editor-off">
        <div id="header-second" class="header-second">
            <slice-practice-lists id="title-practice-lists" user="sangc" slice="abc123"></slice-practice-lists>
        </div>
    </div>
</header>
</body>
</html>
"#;

pub const LISTING_PAGE: &str = r#"
<html><body>
<div class="slice-item slice-item-full" data-score="s1">
    <a class="slice-item-title" href="/slices/s1/">
        Yellow
        (live)
    </a>
    <div class="slice-item-info">
        <span class="only10col"><span class="text-muted">Embeddable</span></span>
    </div>
</div>
<div class="slice-item slice-item-full" data-score="s2">
    <a class="slice-item-title" href="/slices/s2/">Fix You</a>
    <div class="slice-item-info">
        <span class="only10col"><span class="text-muted">Private</span></span>
    </div>
</div>
</body></html>
"#;
