//! School records and the four school levels

use serde::{Deserialize, Deserializer};

use crate::features::paging::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchoolType {
    Sd,
    Smp,
    Sma,
    Smk,
}

impl SchoolType {
    pub const ALL: [SchoolType; 4] = [SchoolType::Sd, SchoolType::Smp, SchoolType::Sma, SchoolType::Smk];

    /// Path segment used by the directory API
    pub fn code(&self) -> &'static str {
        match self {
            SchoolType::Sd => "SD",
            SchoolType::Smp => "SMP",
            SchoolType::Sma => "SMA",
            SchoolType::Smk => "SMK",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "sd" => Some(SchoolType::Sd),
            "smp" => Some(SchoolType::Smp),
            "sma" => Some(SchoolType::Sma),
            "smk" => Some(SchoolType::Smk),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchoolType::Sd => "Sekolah Dasar",
            SchoolType::Smp => "Sekolah Menengah Pertama",
            SchoolType::Sma => "Sekolah Menengah Atas",
            SchoolType::Smk => "Sekolah Menengah Kejuruan",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SchoolType::Sd => "🎓",
            SchoolType::Smp => "📚",
            SchoolType::Sma => "🏛️",
            SchoolType::Smk => "⚙️",
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            SchoolType::Sd => 0x4CAF50,
            SchoolType::Smp => 0x2196F3,
            SchoolType::Sma => 0x9C27B0,
            SchoolType::Smk => 0xFF9800,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SchoolType::Sd => "Pendidikan dasar untuk usia 7-12 tahun",
            SchoolType::Smp => "Pendidikan menengah pertama untuk usia 13-15 tahun",
            SchoolType::Sma => "Pendidikan menengah atas untuk usia 16-18 tahun",
            SchoolType::Smk => "Pendidikan kejuruan untuk persiapan kerja",
        }
    }
}

/// Accept a string, a number or null; the directory is not consistent
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct School {
    #[serde(rename = "sekolah", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub npsn: String,
    /// `N` for a public school, anything else is private
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bentuk: String,
    #[serde(rename = "alamat_jalan", default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(rename = "kecamatan", default, deserialize_with = "lenient_string")]
    pub district: String,
    #[serde(rename = "kabupaten_kota", default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(rename = "provinsi", default, deserialize_with = "lenient_string")]
    pub province: String,
}

impl School {
    pub fn is_public(&self) -> bool {
        self.status.eq_ignore_ascii_case("N")
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_public() {
            "Negeri"
        } else {
            "Swasta"
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.is_public() {
            "🏛️"
        } else {
            "🏢"
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

impl Record for School {
    fn name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> Option<String> {
        Some(format!(
            "{} {}\n```yaml\nNPSN     : {}\nAlamat   : {}\nKecamatan: {}\nKota     : {}\nProvinsi : {}\n```",
            self.status_icon(),
            self.status_label(),
            or_dash(&self.npsn),
            or_dash(&self.address),
            or_dash(&self.district),
            or_dash(&self.city),
            or_dash(&self.province),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_school_type_table() {
        assert_eq!(SchoolType::parse("SMA"), Some(SchoolType::Sma));
        assert_eq!(SchoolType::parse("tk"), None);
        assert_eq!(SchoolType::Smk.code(), "SMK");
        assert_eq!(SchoolType::Sd.color(), 0x4CAF50);
        for t in SchoolType::ALL {
            assert_eq!(SchoolType::parse(t.code()), Some(t));
        }
    }

    #[test]
    fn test_school_from_directory_json() {
        let school: School = serde_json::from_value(json!({
            "sekolah": " SMA NEGERI 1 BANDUNG ",
            "npsn": 20219191,
            "status": "N",
            "bentuk": "SMA",
            "alamat_jalan": "Jl. Ir. H. Juanda No. 93",
            "kecamatan": "Kec. Coblong",
            "kabupaten_kota": "Kota Bandung",
            "provinsi": "Prov. Jawa Barat"
        }))
        .unwrap();

        assert_eq!(school.name, "SMA NEGERI 1 BANDUNG");
        assert_eq!(school.npsn, "20219191");
        assert!(school.is_public());
        assert_eq!(school.status_label(), "Negeri");
    }

    #[test]
    fn test_missing_and_null_fields() {
        let school: School = serde_json::from_value(json!({
            "sekolah": "SD SWASTA HARAPAN",
            "status": "S",
            "alamat_jalan": null
        }))
        .unwrap();

        assert_eq!(school.address, "");
        assert!(!school.is_public());
        let detail = school.detail().unwrap();
        assert!(detail.starts_with("🏢 Swasta"));
        assert!(detail.contains("Alamat   : -"));
    }
}
