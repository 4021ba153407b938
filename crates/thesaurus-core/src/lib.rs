pub mod decode;
pub mod error;
pub mod homograph;
pub mod model;
pub mod sense;
pub mod text;

pub use decode::{decode, decode_value};
pub use error::ModelError;
pub use homograph::{group_by, homograph_key};
pub use model::{
    CrossReference, Derivative, Entry, Example, GrammaticalFeature, HeadwordEntry,
    LexicalCategory, LexicalEntry, Onym, Pronunciation, ResultSet, Tag, ThesaurusLink,
    VariantForm,
};
pub use sense::{Sense, SenseLike, Subsense};
