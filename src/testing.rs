use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::Client;
use crate::error::Error;

pub const OVERVIEW_JSON: &str = r#"{"details":{"id":9768,"name":"Sporting CP"},"tableData":{"tables":[{"leagueName":"Liga Portugal","pageUrl":"/leagues/61/overview/liga-portugal","table":[{"id":9773,"name":"FC Porto","idx":1,"played":30,"wins":24,"draws":4,"losses":2,"pts":76},{"id":9768,"name":"Sporting CP","idx":2,"played":30,"wins":23,"draws":5,"losses":2,"pts":74},{"id":8150,"name":"Benfica","idx":3,"played":30,"wins":21,"draws":5,"losses":4,"pts":68},{"id":7842,"name":"Braga","idx":4,"played":30,"wins":17,"draws":6,"losses":7,"pts":57},{"id":9772,"name":"Vitoria de Guimaraes","idx":5,"played":30,"wins":14,"draws":8,"losses":8,"pts":50},{"id":10218,"name":"Famalicao","idx":6,"played":30,"wins":12,"draws":8,"losses":10,"pts":44}]}]},"fixtures":[{"id":101,"pageUrl":"/match/101","home":{"id":9768,"name":"Sporting CP","score":2},"away":{"id":8150,"name":"Benfica","score":1},"notStarted":false,"status":{"started":true,"finished":true}},{"id":102,"pageUrl":"/match/102","home":{"id":9773,"name":"FC Porto"},"away":{"id":9768,"name":"Sporting CP"},"notStarted":true,"status":{"startTimeStr":"20:30"}}]}"#;

pub const PREVIOUS_DETAILS_JSON: &str = r#"{"general":{"matchId":"101"},"header":{"status":{"started":true,"finished":true,"scoreStr":"2 - 1"},"teams":[{"id":9768,"score":2},{"id":8150,"score":1}]},"content":{"matchFacts":{"infoBox":{"Tournament":{"text":"Liga Portugal  - Round 29"},"Match Date":"2024-04-06T20:30:00Z"}}}}"#;

pub const NEXT_DETAILS_JSON: &str = r#"{"general":{"matchId":"102"},"header":{"status":{"started":false},"teams":[{"id":9773},{"id":9768}]},"content":{"matchFacts":{"infoBox":{"Tournament":{"text":"Liga Portugal - Round 30"},"Match Date":"2024-04-13T20:30:00Z"}}}}"#;

/// A 2x2 transparent PNG.
pub fn png() -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image::RgbaImage::new(2, 2)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

/// In-memory upstream that can be switched offline.
pub struct FakeClient {
    online: AtomicBool,
    overview: Mutex<Vec<u8>>,
    details: HashMap<u64, Vec<u8>>,
}

impl FakeClient {
    pub fn new() -> Self {
        let mut details = HashMap::new();
        details.insert(101, PREVIOUS_DETAILS_JSON.as_bytes().to_vec());
        details.insert(102, NEXT_DETAILS_JSON.as_bytes().to_vec());
        Self {
            online: AtomicBool::new(true),
            overview: Mutex::new(OVERVIEW_JSON.as_bytes().to_vec()),
            details,
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn set_overview(&self, body: Vec<u8>) {
        *self.overview.lock().unwrap() = body;
    }

    fn check_online(&self, url: &str) -> Result<(), Error> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(Error::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            })
        }
    }
}

#[async_trait]
impl Client for FakeClient {
    async fn fetch_team_overview(&self, _team_id: u32, _time_zone: &str) -> Result<Vec<u8>, Error> {
        self.check_online("/api/teams")?;
        Ok(self.overview.lock().unwrap().clone())
    }

    async fn fetch_match_details(&self, match_id: u64) -> Result<Vec<u8>, Error> {
        self.check_online("/api/matchDetails")?;
        self.details.get(&match_id).cloned().ok_or(Error::Status {
            url: format!("/api/matchDetails?matchId={match_id}"),
            status: reqwest::StatusCode::NOT_FOUND,
        })
    }

    async fn fetch_team_badge(&self, _team_id: u32) -> Result<Vec<u8>, Error> {
        self.check_online("/images/team")?;
        Ok(png())
    }
}
