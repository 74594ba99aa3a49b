use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::open_maybe_gz;
use crate::university::UniversityError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityRecord {
    #[serde(rename = "排名")]
    pub rank: u32,
    #[serde(rename = "属性")]
    pub tier: String,
    #[serde(rename = "院校名称")]
    pub name: String,
    #[serde(rename = "本科生")]
    pub undergraduates: u32,
    #[serde(rename = "硕士生")]
    pub masters: Option<u32>,
    #[serde(rename = "博士生")]
    pub doctorates: Option<u32>,
    #[serde(rename = "硕博合计")]
    pub postgraduates: u32,
    #[serde(rename = "研本比")]
    pub ratio: f64,
}

pub const COLUMNS: [&str; 8] = [
    "排名",
    "属性",
    "院校名称",
    "本科生",
    "硕士生",
    "博士生",
    "硕博合计",
    "研本比",
];

type Row = (&'static str, &'static str, u32, Option<u32>, Option<u32>, u32, f64);

// 2024 postgraduate-to-undergraduate ratio ranking.
const BUILTIN: &[Row] = &[
    ("985", "北京大学", 3389, Some(6936), Some(3867), 10803, 3.19),
    ("985", "复旦大学", 4337, None, None, 12321, 2.84),
    ("985", "清华大学", 3800, None, None, 9000, 2.37),
    ("985", "南京大学", 4038, None, None, 8848, 2.19),
    ("985", "北京理工大学", 3900, None, None, 8000, 2.05),
    ("985", "华东师范大学", 3740, None, None, 7670, 2.05),
    ("985", "中国人民大学", 2945, None, None, 5500, 1.87),
    ("985", "同济大学", 4436, Some(5919), Some(2212), 8131, 1.83),
    ("985", "北京航空航天大学", 4378, None, None, 7866, 1.80),
    ("985", "西安交通大学", 6229, None, None, 11129, 1.79),
    ("985", "西北工业大学", 4388, Some(5686), Some(1705), 7391, 1.68),
    ("985", "天津大学", 4909, None, None, 8200, 1.67),
    ("985", "电子科技大学", 5041, Some(6669), Some(1258), 7927, 1.57),
    ("985", "浙江大学", 6503, None, None, 10000, 1.54),
    ("985", "厦门大学", 5364, None, None, 8093, 1.51),
    ("985", "南开大学", 4193, Some(4506), Some(1617), 6123, 1.46),
    ("985", "中国农业大学", 3687, Some(3989), Some(1380), 5369, 1.46),
    ("211", "中山大学", 8255, None, None, 12000, 1.45),
    ("211", "北京科技大学", 3530, Some(3925), Some(1094), 5019, 1.42),
    ("211", "上海大学", 4781, Some(6056), Some(731), 6787, 1.42),
    ("985", "西北大学", 3447, Some(4325), Some(494), 4819, 1.40),
    ("985", "兰州大学", 5054, Some(5363), Some(1352), 6715, 1.33),
    ("985", "东北大学", 5075, Some(5534), Some(1143), 6677, 1.32),
    ("985", "中国海洋大学", 4590, Some(4930), Some(954), 5884, 1.28),
    ("985", "哈尔滨工业大学（三区）", 7934, None, None, 10000, 1.26),
    ("985", "武汉大学", 7325, Some(6774), Some(2426), 9200, 1.26),
    ("985", "对外经济贸易大学", 2269, Some(2580), Some(229), 2809, 1.24),
    ("985", "云南大学", 5082, Some(5536), Some(661), 6197, 1.22),
    ("985", "大连理工大学", 6350, Some(6349), Some(1389), 7738, 1.22),
    ("985", "北京师范大学（珠海）", 1923, Some(2001), Some(335), 2336, 1.21),
    ("211", "华东理工大学", 4262, Some(4180), Some(901), 5081, 1.19),
    ("211", "中国政法大学", 2274, None, None, 2700, 1.19),
    ("211", "北京邮电大学", 3930, None, None, 4560, 1.16),
    ("211", "湖南大学", 5631, Some(5178), Some(1328), 6506, 1.16),
    ("211", "中央财经大学", 2535, Some(2636), Some(240), 2876, 1.13),
];

pub fn builtin_universities() -> Vec<UniversityRecord> {
    BUILTIN
        .iter()
        .enumerate()
        .map(
            |(i, &(tier, name, undergraduates, masters, doctorates, postgraduates, ratio))| {
                UniversityRecord {
                    rank: i as u32 + 1,
                    tier: tier.to_string(),
                    name: name.to_string(),
                    undergraduates,
                    masters,
                    doctorates,
                    postgraduates,
                    ratio,
                }
            },
        )
        .collect()
}

/// Reads records from a CSV using the Chinese column headers of the
/// built-in dataset. Empty master/doctorate cells become `None`.
pub fn load_universities_csv(path: &Path) -> Result<Vec<UniversityRecord>, UniversityError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut out = Vec::new();
    for record in csv_reader.deserialize() {
        out.push(record?);
    }
    Ok(out)
}

pub fn write_universities_csv(
    path: &Path,
    records: &[UniversityRecord],
) -> Result<(), UniversityError> {
    let mut w = csv::Writer::from_path(path)?;
    for r in records {
        w.serialize(r)?;
    }
    w.flush()?;
    Ok(())
}
