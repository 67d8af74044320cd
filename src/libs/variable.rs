use std::env;

/// Value of `key`, with unset and empty values both reported as `None`.
pub fn get_environment_variable(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_none() {
        assert_eq!(get_environment_variable("LINKSHELF_TEST_SURELY_UNSET_VARIABLE"), None);
    }

    #[test]
    fn blank_variable_is_none() {
        env::set_var("LINKSHELF_TEST_EMPTY_VARIABLE", "");
        env::set_var("LINKSHELF_TEST_BLANK_VARIABLE", "  ");

        assert_eq!(get_environment_variable("LINKSHELF_TEST_EMPTY_VARIABLE"), None);
        assert_eq!(get_environment_variable("LINKSHELF_TEST_BLANK_VARIABLE"), None);
    }

    #[test]
    fn set_variable_is_returned() {
        env::set_var("LINKSHELF_TEST_SET_VARIABLE", "redis://localhost:6379");

        assert_eq!(
            get_environment_variable("LINKSHELF_TEST_SET_VARIABLE").as_deref(),
            Some("redis://localhost:6379")
        );
    }
}
