/// Presentation layer: egui widgets reading from and writing to `AppState`.
pub mod panels;
pub mod plot;
pub mod table;
