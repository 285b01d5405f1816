/// Every World Cup final as (year, winner, runner-up), using the names of
/// the day. Normalized on load.
pub const FINALS: [(i32, &str, &str); 22] = [
    (1930, "Uruguay", "Argentina"),
    (1934, "Italy", "Czechoslovakia"),
    (1938, "Italy", "Hungary"),
    (1950, "Uruguay", "Brazil"),
    (1954, "West Germany", "Hungary"),
    (1958, "Brazil", "Sweden"),
    (1962, "Brazil", "Czechoslovakia"),
    (1966, "England", "West Germany"),
    (1970, "Brazil", "Italy"),
    (1974, "West Germany", "Netherlands"),
    (1978, "Argentina", "Netherlands"),
    (1982, "Italy", "West Germany"),
    (1986, "Argentina", "West Germany"),
    (1990, "West Germany", "Argentina"),
    (1994, "Brazil", "Italy"),
    (1998, "France", "Brazil"),
    (2002, "Brazil", "Germany"),
    (2006, "Italy", "France"),
    (2010, "Spain", "Netherlands"),
    (2014, "Germany", "Argentina"),
    (2018, "France", "Croatia"),
    (2022, "Argentina", "France"),
];

/// Historical team names mapped to the present-day country used on the map.
pub const HISTORICAL_NAMES: [(&str, &str); 3] = [
    ("West Germany", "Germany"),
    ("England", "United Kingdom"),
    ("Czechoslovakia", "Czech Republic"),
];
