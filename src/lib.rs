// ============================================================================
// COURIER TRACKER - Shipment tracking frontend (Yew + WebAssembly)
// ============================================================================
// Layers:
// - components: Yew views, no business rules
// - hooks: router, toasts and the auth guard wiring
// - viewmodels: form validation and role-aware dashboard logic
// - services: token store, session decoding, GraphQL gateway
// - state / models: plain data shared by everything above
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod utils;
