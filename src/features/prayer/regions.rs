//! Keyword classification of cities into six regions

use super::cities::City;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Jawa,
    Sumatera,
    Kalimantan,
    Sulawesi,
    BaliNtt,
    MalukuPapua,
}

impl Region {
    /// Classification order; the first region with a matching keyword wins
    pub const ALL: [Region; 6] = [
        Region::Jawa,
        Region::Sumatera,
        Region::Kalimantan,
        Region::Sulawesi,
        Region::BaliNtt,
        Region::MalukuPapua,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Region::Jawa => "jawa",
            Region::Sumatera => "sumatera",
            Region::Kalimantan => "kalimantan",
            Region::Sulawesi => "sulawesi",
            Region::BaliNtt => "bali_ntt",
            Region::MalukuPapua => "maluku_papua",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Jawa => "Jawa",
            Region::Sumatera => "Sumatera",
            Region::Kalimantan => "Kalimantan",
            Region::Sulawesi => "Sulawesi",
            Region::BaliNtt => "Bali & Nusa Tenggara",
            Region::MalukuPapua => "Maluku & Papua",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Region::Jawa => "🏙️",
            Region::Sumatera => "🌋",
            Region::Kalimantan => "🏝️",
            Region::Sulawesi => "🌊",
            Region::BaliNtt => "🏖️",
            Region::MalukuPapua => "🦜",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Region::Jawa => &[
                "jakarta", "jawa", "bandung", "semarang", "yogyakarta", "yogya", "solo",
                "surabaya", "malang", "banten", "bogor", "bekasi", "tangerang", "depok",
                "cirebon", "sukabumi", "tasikmalaya", "cilegon", "serang", "cimahi", "tegal",
                "pekalongan", "salatiga", "magelang", "purwokerto", "kediri", "madiun",
                "mojokerto", "pasuruan", "batu", "blitar", "probolinggo",
            ],
            Region::Sumatera => &[
                "sumatera", "sumatra", "aceh", "medan", "padang", "palembang", "pekanbaru",
                "jambi", "bengkulu", "bandar lampung", "lampung", "pangkal pinang",
                "tanjungpinang", "batam", "bintan", "tanjung balai", "dumai", "bukit tinggi",
                "payakumbuh", "pariaman", "solok", "padang panjang", "sawahlunto",
                "lubuk linggau", "prabumulih", "tebing tinggi", "pematang siantar", "binjai",
                "sibolga", "padang sidempuan", "gunungsitoli", "banda aceh", "langsa",
                "lhokseumawe", "subulussalam",
            ],
            Region::Kalimantan => &[
                "kalimantan", "borneo", "pontianak", "palangkaraya", "banjarmasin", "samarinda",
                "tanjung selor", "tarakan", "bontang", "balikpapan", "singkawang", "sampit",
                "palangka raya",
            ],
            Region::Sulawesi => &[
                "sulawesi", "celebes", "makassar", "manado", "palu", "kendari", "gorontalo",
                "mamuju", "bitung", "tomohon", "kotamobagu", "bau-bau",
            ],
            Region::BaliNtt => &["bali", "denpasar", "mataram", "kupang", "nusa", "singaraja"],
            Region::MalukuPapua => &[
                "maluku", "papua", "jayapura", "manokwari", "sorong", "ternate", "ambon",
                "fakfak", "merauke", "timika",
            ],
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lowercase words separated by single spaces, padded for whole-word matching
fn words(text: &str) -> String {
    let joined = text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!(" {joined} ")
}

/// Region of a city by whole-word keyword match; unknown cities go to Jawa
pub fn classify(city_name: &str) -> Region {
    let haystack = words(city_name);
    Region::ALL
        .into_iter()
        .find(|region| {
            region
                .keywords()
                .iter()
                .any(|keyword| haystack.contains(&words(keyword)))
        })
        .unwrap_or(Region::Jawa)
}

/// Every region in display order with its cities sorted by name
pub fn group_by_region(cities: &[City]) -> Vec<(Region, Vec<City>)> {
    let mut groups: Vec<(Region, Vec<City>)> =
        Region::ALL.into_iter().map(|r| (r, Vec::new())).collect();

    for city in cities {
        let region = classify(&city.name);
        if let Some((_, list)) = groups.iter_mut().find(|(r, _)| *r == region) {
            list.push(city.clone());
        }
    }

    for (_, list) in groups.iter_mut() {
        list.sort_by_cached_key(|c| c.name.to_lowercase());
    }
    groups
}

/// Cities of one region, sorted by name
pub fn cities_in(region: Region, cities: &[City]) -> Vec<City> {
    let mut list: Vec<City> = cities
        .iter()
        .filter(|c| classify(&c.name) == region)
        .cloned()
        .collect();
    list.sort_by_cached_key(|c| c.name.to_lowercase());
    list
}
