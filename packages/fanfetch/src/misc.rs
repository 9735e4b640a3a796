use std::any::Any;

/// Message of a caught panic, as passed to `panic!`
///
/// ```rust
/// let payload = std::panic::catch_unwind(|| panic!("post {} is missing", 3)).unwrap_err();
/// assert_eq!(fanfetch::panic_message(payload.as_ref()), "post 3 is missing");
/// ```
pub fn panic_message<'a>(payload: &'a (dyn Any + Send + 'static)) -> &'a str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        return s;
    }
    match payload.downcast_ref::<String>() {
        Some(s) => s,
        None => "(panic payload is not a string)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_payload() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");
        let payload: Box<dyn Any + Send> = Box::new(format!("post {}", 4));
        assert_eq!(panic_message(payload.as_ref()), "post 4");
        let payload: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "(panic payload is not a string)");
    }
}
