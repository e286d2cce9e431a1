//! 乘客预订表单
//!
//! 表单数据、必填校验以及提交成功后展示用的摘要。
//! 摘要中的车名和价格只由车型决定，与服务端响应无关。

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in name, from and to fields.";
/// 摘要中固定显示的座位号
pub const PLACEHOLDER_SEAT: &str = "A12";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Shuttle,
    Normal,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Shuttle => "shuttle",
            VehicleType::Normal => "normal",
        }
    }

    /// 解析 `<select>` 的值，未知值回退为默认车型
    pub fn from_value(value: &str) -> Self {
        match value {
            "normal" => VehicleType::Normal,
            _ => VehicleType::Shuttle,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Shuttle => "Shuttle",
            VehicleType::Normal => "Normal Bus",
        }
    }

    pub fn bus_name(&self) -> &'static str {
        match self {
            VehicleType::Shuttle => "Transline Shuttle",
            VehicleType::Normal => "Modern Bus",
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            VehicleType::Shuttle => "KES 500",
            VehicleType::Normal => "KES 700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    pub name: String,
    pub id_number: String,
    pub school_id: String,
    pub from: String,
    pub to: String,
    pub vehicle_type: VehicleType,
}

impl BookingFormData {
    /// 姓名、出发地、目的地为必填
    pub fn validate(&self) -> ClientResult<()> {
        let missing = [&self.name, &self.from, &self.to]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            return Err(ClientError::validation(MISSING_FIELDS_MESSAGE));
        }
        Ok(())
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary {
            form: self.clone(),
            bus_name: self.vehicle_type.bus_name().to_string(),
            route: self.route(),
            seat_no: PLACEHOLDER_SEAT.to_string(),
            price: self.vehicle_type.price().to_string(),
        }
    }
}

/// 跳转到支付页时携带的展示数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    #[serde(flatten)]
    pub form: BookingFormData,
    pub bus_name: String,
    pub route: String,
    pub seat_no: String,
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientErrorKind;

    fn filled() -> BookingFormData {
        BookingFormData {
            name: "Wanjiku".to_string(),
            from: "Nairobi".to_string(),
            to: "Kisumu".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(filled().validate().is_ok());

        for blank in ["name", "from", "to"] {
            let mut form = filled();
            match blank {
                "name" => form.name = "  ".to_string(),
                "from" => form.from.clear(),
                _ => form.to.clear(),
            }
            let err = form.validate().unwrap_err();
            assert_eq!(err.kind, ClientErrorKind::Validation);
            assert!(!err.message().is_empty());
        }
    }

    #[test]
    fn test_optional_fields_not_required() {
        let form = filled();
        assert!(form.id_number.is_empty() && form.school_id.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_summary_derived_from_vehicle_type() {
        let shuttle = filled().summary();
        assert_eq!(shuttle.bus_name, "Transline Shuttle");
        assert_eq!(shuttle.price, "KES 500");
        assert_eq!(shuttle.route, "Nairobi → Kisumu");
        assert_eq!(shuttle.seat_no, "A12");

        let normal = BookingFormData {
            vehicle_type: VehicleType::Normal,
            ..filled()
        }
        .summary();
        assert_eq!(normal.bus_name, "Modern Bus");
        assert_eq!(normal.price, "KES 700");
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["vehicleType"], "shuttle");
        assert_eq!(value["idNumber"], "");
        assert_eq!(value["from"], "Nairobi");
        assert_eq!(VehicleType::from_value("normal"), VehicleType::Normal);
        assert_eq!(VehicleType::from_value("bogus"), VehicleType::Shuttle);
    }
}
