//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换

use busbook_shared::{BookingFormData, VehicleType};
use leptos::prelude::*;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    // 乘客信息
    pub name: RwSignal<String>,
    pub id_number: RwSignal<String>,
    pub school_id: RwSignal<String>,

    // 行程
    pub from: RwSignal<String>,
    pub to: RwSignal<String>,
    pub vehicle_type: RwSignal<VehicleType>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            id_number: RwSignal::new(String::new()),
            school_id: RwSignal::new(String::new()),
            from: RwSignal::new(String::new()),
            to: RwSignal::new(String::new()),
            vehicle_type: RwSignal::new(VehicleType::default()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.id_number.set(String::new());
        self.school_id.set(String::new());
        self.from.set(String::new());
        self.to.set(String::new());
        self.vehicle_type.set(VehicleType::default());
    }

    /// 将表单状态转换为提交数据
    pub fn to_data(&self) -> BookingFormData {
        BookingFormData {
            name: self.name.get_untracked(),
            id_number: self.id_number.get_untracked(),
            school_id: self.school_id.get_untracked(),
            from: self.from.get_untracked(),
            to: self.to.get_untracked(),
            vehicle_type: self.vehicle_type.get_untracked(),
        }
    }
}
