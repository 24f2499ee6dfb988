mod load;
mod song;


pub use load::{DEFAULT_EMBEDDING_PREFIX, SONG_COLUMN};
pub use song::{Song, SongTable};
