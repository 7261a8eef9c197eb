//! Static NBA team tables: strength tier and three-letter abbreviation.

/// Tier assigned to teams missing from [`TEAM_TIERS`].
pub const DEFAULT_TIER: u8 = 3;

/// Abbreviation returned for teams missing from [`TEAM_ABBREVIATIONS`].
pub const UNKNOWN_ABBREVIATION: &str = "UNK";

/// Strength tier per team, 1 (strongest) to 5 (weakest).
pub const TEAM_TIERS: &[(&str, u8)] = &[
    ("Boston Celtics", 1),
    ("Oklahoma City Thunder", 1),
    ("Cleveland Cavaliers", 1),
    ("Denver Nuggets", 2),
    ("Milwaukee Bucks", 2),
    ("New York Knicks", 2),
    ("Phoenix Suns", 2),
    ("Los Angeles Lakers", 2),
    ("Miami Heat", 2),
    ("Minnesota Timberwolves", 2),
    ("Dallas Mavericks", 2),
    ("Sacramento Kings", 2),
    ("Indiana Pacers", 3),
    ("Orlando Magic", 3),
    ("Philadelphia 76ers", 3),
    ("Los Angeles Clippers", 3),
    ("Golden State Warriors", 3),
    ("Houston Rockets", 3),
    ("Memphis Grizzlies", 3),
    ("New Orleans Pelicans", 3),
    ("Atlanta Hawks", 3),
    ("Chicago Bulls", 4),
    ("Brooklyn Nets", 4),
    ("Toronto Raptors", 4),
    ("San Antonio Spurs", 4),
    ("Utah Jazz", 4),
    ("Portland Trail Blazers", 4),
    ("Charlotte Hornets", 5),
    ("Detroit Pistons", 5),
    ("Washington Wizards", 5),
];

pub const TEAM_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Atlanta Hawks", "ATL"),
    ("Boston Celtics", "BOS"),
    ("Brooklyn Nets", "BKN"),
    ("Charlotte Hornets", "CHA"),
    ("Chicago Bulls", "CHI"),
    ("Cleveland Cavaliers", "CLE"),
    ("Dallas Mavericks", "DAL"),
    ("Denver Nuggets", "DEN"),
    ("Detroit Pistons", "DET"),
    ("Golden State Warriors", "GSW"),
    ("Houston Rockets", "HOU"),
    ("Indiana Pacers", "IND"),
    ("Los Angeles Clippers", "LAC"),
    ("Los Angeles Lakers", "LAL"),
    ("Memphis Grizzlies", "MEM"),
    ("Miami Heat", "MIA"),
    ("Milwaukee Bucks", "MIL"),
    ("Minnesota Timberwolves", "MIN"),
    ("New Orleans Pelicans", "NOP"),
    ("New York Knicks", "NYK"),
    ("Oklahoma City Thunder", "OKC"),
    ("Orlando Magic", "ORL"),
    ("Philadelphia 76ers", "PHI"),
    ("Phoenix Suns", "PHX"),
    ("Portland Trail Blazers", "POR"),
    ("Sacramento Kings", "SAC"),
    ("San Antonio Spurs", "SAS"),
    ("Toronto Raptors", "TOR"),
    ("Utah Jazz", "UTA"),
    ("Washington Wizards", "WAS"),
];

/// Look up a team's tier, falling back to [`DEFAULT_TIER`].
pub fn tier_for(team_name: &str) -> u8 {
    TEAM_TIERS
        .iter()
        .find(|(name, _)| *name == team_name)
        .map(|(_, tier)| *tier)
        .unwrap_or(DEFAULT_TIER)
}

/// Look up a team's abbreviation, falling back to [`UNKNOWN_ABBREVIATION`].
pub fn abbreviation_for(team_name: &str) -> &'static str {
    TEAM_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == team_name)
        .map(|(_, abbrev)| *abbrev)
        .unwrap_or(UNKNOWN_ABBREVIATION)
}
