//! Basic usage example for formcheck

use formcheck::foundation::Validate;
use formcheck::validators::Password;
use formcheck::{email, max, min_length, required, tel};

fn main() {
    let inputs = ["user@world.net", "user@@world", "   "];

    for input in inputs {
        if email(input) {
            println!("✓ '{input}' is an email address");
        } else if !required(input) {
            println!("✗ '{input}' is blank");
        } else {
            println!("✗ '{input}' is not an email address");
        }
    }

    println!("tel '+1 646 847 9415': {}", tel("+1 646 847 9415"));
    println!("min_length('alice', 3): {}", min_length("alice", 3));
    println!("max('8', '20'): {}", max("8", "20"));

    let password = Password::new().min_length(12).require_special(true);
    println!("strong password: {}", password.check("MyP@ssw0rd123!"));
}
