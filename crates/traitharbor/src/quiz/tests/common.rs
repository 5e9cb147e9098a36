use std::io;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::quiz::{
    AnswerSet, Facet, FacetId, FacetMap, Item, ItemBank, ItemDirection, ItemId, LikertValue,
    QuizCatalog,
};

pub(super) fn likert(value: u8) -> LikertValue {
    LikertValue::new(value).expect("valid likert value")
}

pub(super) fn item(id: &str, facet: &str, direction: ItemDirection) -> Item {
    Item {
        id: ItemId::new(id),
        text: format!("Statement {id}"),
        facet_id: FacetId::new(facet),
        direction,
        quick: true,
    }
}

pub(super) fn facet(id: &str, trait_id: &str, position: u8, label: &str) -> Facet {
    Facet {
        id: FacetId::new(id),
        trait_id: trait_id.to_string(),
        position,
        label: label.to_string(),
    }
}

pub(super) fn standard_bank() -> ItemBank {
    ItemBank::standard().expect("bundled items parse")
}

pub(super) fn standard_facets() -> FacetMap {
    FacetMap::standard().expect("bundled facets parse")
}

pub(super) fn standard_catalog() -> QuizCatalog {
    QuizCatalog::standard().expect("bundled catalog validates")
}

pub(super) fn answer_all(items: &[Item], value: u8) -> AnswerSet {
    items
        .iter()
        .map(|item| (item.id.clone(), likert(value)))
        .collect()
}

/// Runs `f` with a subscriber writing WARN+ events into a buffer and returns the output.
pub(super) fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = sink.0.lock().expect("lock output").clone();
    (result, String::from_utf8(bytes).expect("utf8 log output"))
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
