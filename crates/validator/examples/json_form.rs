//! Validating a JSON form payload field by field.

use formcheck::foundation::{Validate, Value};
use formcheck::validators::{Age, Email, MatchValue, Password, Required, Tel};
use serde_json::json;

fn main() {
    let form = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.org",
        "phone": "+44 (0)20 7684 8444",
        "dob": "1990-12-10",
        "password": "Engine2024!x",
        "confirm": "Engine2024!x",
    });

    let confirm = MatchValue::new(&form["password"]);
    let checks: [(&str, &dyn Validate); 6] = [
        ("name", &Required),
        ("email", &Email),
        ("phone", &Tel::default()),
        ("dob", &Age::new().min_years(18)),
        ("password", &Password::default()),
        ("confirm", &confirm),
    ];

    for (field, validator) in checks {
        let status = if validator.is_valid(&Value::from(&form[field])) { "ok" } else { "invalid" };
        println!("{field:>10}: {status}");
    }
}
