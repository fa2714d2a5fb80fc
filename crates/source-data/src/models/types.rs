use std::borrow::Cow;

use serde_json::{Map, Value};

/// Source identifier - mostly static constants
pub type SourceId = Cow<'static, str>;

/// One untyped JSON object as delivered by a dataset
pub type RawRecord = Map<String, Value>;
