use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// JSON 数值：整数保持整数，出现小数后变为浮点
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }

    /// 从 BSON 数值读取，非数值字段视为缺失
    pub fn from_bson(value: &Bson) -> Option<Self> {
        match value {
            Bson::Int32(i) => Some(Numeric::Int(i64::from(*i))),
            Bson::Int64(i) => Some(Numeric::Int(*i)),
            Bson::Double(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::Int(0)
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl Add for Numeric {
    type Output = Numeric;

    fn add(self, rhs: Numeric) -> Numeric {
        match (self, rhs) {
            (Numeric::Int(a), Numeric::Int(b)) => match a.checked_add(b) {
                Some(sum) => Numeric::Int(sum),
                None => Numeric::Float(a as f64 + b as f64),
            },
            (a, b) => Numeric::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl From<Numeric> for Bson {
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::Int(i) => Bson::Int64(i),
            Numeric::Float(f) => Bson::Double(f),
        }
    }
}
