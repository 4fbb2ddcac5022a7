//! 宽松标量反序列化工具
//!
//! DNSPod 的 JSON 字段类型并不稳定：同一个字段可能是字符串、数字或 `null`
//! （例如域名 `id` 是数字，记录 `id` 是字符串，`weight` 经常为 `null`）。
//! 这里统一规整为字符串：
//! - `string`: 字符串/数字/布尔 -> `String`，`null` -> 空字符串
//! - `opt_string`: 字符串/数字/布尔 -> `Some(String)`，`null` -> `None`

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::I64(n) => n.to_string(),
            Self::U64(n) => n.to_string(),
            Self::F64(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// 反序列化为 `String`，`null` 视为空字符串
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// 反序列化为 `Option<String>`，`null` 视为 `None`
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}
