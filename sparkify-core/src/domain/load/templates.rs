// sparkify-core/src/domain/load/templates.rs

// Star-schema population from the staging tables. These are fixed
// analytical queries: no runtime parameters, Redshift dialect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::copy::build_truncate_statement;
use crate::domain::error::DomainError;

const SONGPLAYS_INSERT: &str = "\
INSERT INTO songplays (playid, start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
SELECT
    md5(events.sessionid::VARCHAR || events.ts::VARCHAR) AS playid,
    TIMESTAMP 'epoch' + events.ts / 1000 * INTERVAL '1 second' AS start_time,
    events.userid AS user_id,
    events.level,
    songs.song_id,
    songs.artist_id,
    events.sessionid AS session_id,
    events.location,
    events.useragent AS user_agent
FROM staging_events AS events
JOIN staging_songs AS songs
  ON events.song = songs.title
 AND events.artist = songs.artist_name
 AND events.length = songs.duration
WHERE events.page = 'NextSong';";

const USERS_INSERT: &str = "\
INSERT INTO users (user_id, first_name, last_name, gender, level)
SELECT DISTINCT
    userid AS user_id,
    firstname AS first_name,
    lastname AS last_name,
    gender,
    level
FROM staging_events
WHERE userid IS NOT NULL
  AND page = 'NextSong';";

const SONGS_INSERT: &str = "\
INSERT INTO songs (song_id, title, artist_id, year, duration)
SELECT DISTINCT
    song_id,
    title,
    artist_id,
    year,
    duration
FROM staging_songs
WHERE song_id IS NOT NULL;";

const ARTISTS_INSERT: &str = "\
INSERT INTO artists (artist_id, name, location, latitude, longitude)
SELECT DISTINCT
    artist_id,
    artist_name AS name,
    artist_location AS location,
    artist_latitude AS latitude,
    artist_longitude AS longitude
FROM staging_songs
WHERE artist_id IS NOT NULL;";

const TIME_INSERT: &str = "\
INSERT INTO time (start_time, hour, day, week, month, year, weekday)
SELECT DISTINCT
    start_time,
    EXTRACT(hour FROM start_time)::INT AS hour,
    EXTRACT(day FROM start_time)::INT AS day,
    EXTRACT(week FROM start_time)::INT AS week,
    EXTRACT(month FROM start_time)::INT AS month,
    EXTRACT(year FROM start_time)::INT AS year,
    EXTRACT(dow FROM start_time)::INT AS weekday
FROM songplays
WHERE start_time IS NOT NULL;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertTemplate {
    Songplays,
    Users,
    Songs,
    Artists,
    Time,
}

impl InsertTemplate {
    pub const ALL: [InsertTemplate; 5] = [
        Self::Songplays,
        Self::Users,
        Self::Songs,
        Self::Artists,
        Self::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Songplays => "songplays",
            Self::Users => "users",
            Self::Songs => "songs",
            Self::Artists => "artists",
            Self::Time => "time",
        }
    }

    /// Star-schema table the template inserts into.
    pub fn target_table(&self) -> &'static str {
        self.as_str()
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Self::Songplays => SONGPLAYS_INSERT,
            Self::Users => USERS_INSERT,
            Self::Songs => SONGS_INSERT,
            Self::Artists => ARTISTS_INSERT,
            Self::Time => TIME_INSERT,
        }
    }

    pub fn is_fact(&self) -> bool {
        matches!(self, Self::Songplays)
    }

    /// Facts accumulate, dimensions are rebuilt.
    pub fn default_mode(&self) -> LoadMode {
        if self.is_fact() {
            LoadMode::Append
        } else {
            LoadMode::TruncateInsert
        }
    }
}

impl fmt::Display for InsertTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsertTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "songplays" => Ok(Self::Songplays),
            "users" => Ok(Self::Users),
            "songs" => Ok(Self::Songs),
            "artists" => Ok(Self::Artists),
            "time" => Ok(Self::Time),
            _ => Err(DomainError::UnknownTemplate(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadMode {
    Append,
    /// Empties the target first, so re-running never duplicates rows.
    #[serde(alias = "delete-load")]
    TruncateInsert,
}

/// One fact or dimension load task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableLoad {
    pub template: InsertTemplate,
    #[serde(default)]
    pub mode: Option<LoadMode>,
}

impl TableLoad {
    pub fn new(template: InsertTemplate) -> Self {
        Self {
            template,
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: LoadMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn effective_mode(&self) -> LoadMode {
        self.mode.unwrap_or_else(|| self.template.default_mode())
    }

    /// Statements to run, in order.
    pub fn statements(&self) -> Vec<String> {
        let mut statements = Vec::with_capacity(2);
        if self.effective_mode() == LoadMode::TruncateInsert {
            statements.push(build_truncate_statement(self.template.target_table()));
        }
        statements.push(self.template.sql().to_string());
        statements
    }
}
