//! 乘客与行程字段
//!
//! 纯粹的表单输入渲染，职责单一。

use busbook_shared::VehicleType;
use leptos::prelude::*;

use super::form_state::FormState;

/// 单行文本输入
#[component]
fn TextField(
    field: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=field class="label">
                <span class="label-text">{label}</span>
            </label>
            <input id=field
                type="text"
                placeholder=placeholder
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

/// 预订表单的全部输入项
#[component]
pub fn PassengerFields(state: FormState) -> impl IntoView {
    let vehicle_options = [VehicleType::Shuttle, VehicleType::Normal];

    view! {
        <TextField field="name" label="Full Name" placeholder="Jane Wanjiru" value=state.name required=true />

        <div class="grid grid-cols-2 gap-4">
            <TextField field="idNumber" label="ID Number" placeholder="12345678" value=state.id_number />
            <TextField field="schoolId" label="School ID" placeholder="S-2024-001" value=state.school_id />
        </div>

        <div class="grid grid-cols-2 gap-4">
            <TextField field="from" label="From" placeholder="Nairobi" value=state.from required=true />
            <TextField field="to" label="To" placeholder="Nakuru" value=state.to required=true />
        </div>

        <div class="form-control">
            <label for="vehicleType" class="label">
                <span class="label-text">"Vehicle Type"</span>
            </label>
            <select id="vehicleType"
                class="select select-bordered w-full"
                on:change=move |ev| state.vehicle_type.set(VehicleType::from_value(&event_target_value(&ev)))
            >
                {vehicle_options
                    .into_iter()
                    .map(|vehicle| view! {
                        <option
                            value=vehicle.as_str()
                            selected=move || state.vehicle_type.get() == vehicle
                        >
                            {format!("{} ({})", vehicle.label(), vehicle.price())}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
