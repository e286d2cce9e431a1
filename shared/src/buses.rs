use crate::{Bus, RecordId};

/// 预订成功后在本地扣减座位数
///
/// 只是显示上的近似值：不会重新拉取服务端数据，多个会话同时预订时可能与实际不符。
/// 座位数不会低于 0。返回是否找到了对应的车辆。
pub fn apply_seat_booking(buses: &mut [Bus], bus_id: &RecordId, seats: u32) -> bool {
    let mut found = false;
    for bus in buses.iter_mut().filter(|bus| &bus.id == bus_id) {
        bus.available_seats = bus.available_seats.saturating_sub(seats);
        found = true;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(id: i64, seats: u32) -> Bus {
        Bus {
            id: RecordId::Number(id),
            name: format!("Bus {}", id),
            route: "Nairobi - Mombasa".to_string(),
            available_seats: seats,
            price: None,
        }
    }

    #[test]
    fn test_decrements_matching_bus_only() {
        let mut buses = vec![bus(1, 3), bus(2, 10)];
        assert!(apply_seat_booking(&mut buses, &RecordId::Number(1), 2));
        assert_eq!(buses[0].available_seats, 1);
        assert_eq!(buses[1].available_seats, 10);
    }

    #[test]
    fn test_clamps_at_zero() {
        let mut buses = vec![bus(1, 3)];
        apply_seat_booking(&mut buses, &RecordId::Number(1), 5);
        assert_eq!(buses[0].available_seats, 0);
    }

    #[test]
    fn test_unknown_bus_is_untouched() {
        let mut buses = vec![bus(1, 3)];
        assert!(!apply_seat_booking(&mut buses, &RecordId::from("1"), 1));
        assert_eq!(buses[0].available_seats, 3);
    }

    #[test]
    fn test_wire_name_is_camel_case() {
        let parsed: Bus =
            serde_json::from_str(r#"{"id":4,"name":"Guardian","route":"Eldoret","availableSeats":12}"#)
                .unwrap();
        assert_eq!(parsed.available_seats, 12);
        assert_eq!(parsed.price, None);
    }
}
