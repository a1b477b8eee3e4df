pub mod layers;
pub mod templates;

/// Join an output subdirectory and a file name.
///
/// - `dir = "orders"` → `"orders/OrdersDao.java"`
/// - `dir = ""` → `"OrdersDao.java"`
pub fn output_path(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
