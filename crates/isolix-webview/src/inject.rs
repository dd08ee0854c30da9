//! Text injection script for panel pages.

use isolix_common::InjectError;

/// Build the script that types `payload` into a page.
///
/// Target is the focused input, textarea, or content-editable element;
/// failing that, the first `input[type=search]`, `input[type=text]`, or
/// `textarea`. The value goes through the prototype's native setter so
/// framework-managed inputs see it, then `input` and `change` fire. No
/// Enter key is sent. The script evaluates to `true` when a field was found.
pub fn injection_script(payload: &str) -> Result<String, InjectError> {
    // JSON string literals are valid JavaScript string literals.
    let text = serde_json::to_string(payload).map_err(|e| InjectError::Script(e.to_string()))?;
    Ok(format!(
        r#"(function() {{
  var text = {text};
  function typeInto(el) {{
    if (!el) return false;
    el.focus();
    var inputSetter = Object.getOwnPropertyDescriptor(window.HTMLInputElement.prototype, "value");
    var areaSetter = Object.getOwnPropertyDescriptor(window.HTMLTextAreaElement.prototype, "value");
    if (el.tagName === "INPUT" && inputSetter && inputSetter.set) {{
      inputSetter.set.call(el, text);
    }} else if (el.tagName === "TEXTAREA" && areaSetter && areaSetter.set) {{
      areaSetter.set.call(el, text);
    }} else {{
      el.value = text;
      el.textContent = text;
    }}
    el.dispatchEvent(new Event("input", {{ bubbles: true }}));
    el.dispatchEvent(new Event("change", {{ bubbles: true }}));
    return true;
  }}
  var active = document.activeElement;
  if (active && (active.tagName === "INPUT" || active.tagName === "TEXTAREA" || active.isContentEditable)) {{
    return typeInto(active);
  }}
  return typeInto(document.querySelector('input[type="search"], input[type="text"], textarea'));
}})()"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_a_json_string_literal() {
        let script = injection_script("hello").unwrap();
        assert!(script.contains("var text = \"hello\";"));
    }

    #[test]
    fn empty_payload_is_an_empty_literal() {
        let script = injection_script("").unwrap();
        assert!(script.contains("var text = \"\";"));
    }

    #[test]
    fn quotes_and_newlines_are_escaped() {
        let script = injection_script("it's \"quoted\"\nnext </script>").unwrap();
        assert!(script.contains(r#"var text = "it's \"quoted\"\nnext </script>";"#));
        // The raw newline must not end up inside the literal.
        let literal_line = script
            .lines()
            .find(|l| l.contains("var text"))
            .unwrap();
        assert!(literal_line.ends_with(';'));
    }

    #[test]
    fn focused_element_first_then_selector() {
        let script = injection_script("x").unwrap();
        let focused = script.find("document.activeElement").unwrap();
        let selector = script
            .find(r#"input[type="search"], input[type="text"], textarea"#)
            .unwrap();
        assert!(focused < selector);
        assert!(script.contains("isContentEditable"));
    }

    #[test]
    fn fires_input_and_change_without_enter() {
        let script = injection_script("x").unwrap();
        assert!(script.contains(r#"new Event("input""#));
        assert!(script.contains(r#"new Event("change""#));
        assert!(!script.contains("KeyboardEvent"));
        assert!(!script.contains("Enter"));
    }

    #[test]
    fn uses_native_value_setter() {
        let script = injection_script("x").unwrap();
        assert!(script.contains("HTMLInputElement.prototype"));
        assert!(script.contains("HTMLTextAreaElement.prototype"));
    }
}
