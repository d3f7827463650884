//! Pseudo-source text for function values.

use crate::types::FunctionRef;

/// Description used for C functions.
pub const NATIVE_FUNCTION_SOURCE: &str = "function() [native code] end";

/// Render the description of a function reference.
///
/// Lua functions get a placeholder body naming where they are defined; the
/// text is not the function's real source.
///
/// ```rust
/// use tabson_core::function::function_source;
/// use tabson_core::types::FunctionRef;
///
/// let source = function_source(&FunctionRef::lua("main.lua", 3, 9));
/// assert_eq!(source, "function()\n    main.lua:3,9\nend");
/// ```
#[must_use]
pub fn function_source(function: &FunctionRef) -> String
{
    if function.native {
        return NATIVE_FUNCTION_SOURCE.to_string();
    }
    // TODO: read lines line_begin..=line_end of `file` once the adapter has source access
    format!(
        "function()\n    {}:{},{}\nend",
        function.file, function.line_begin, function.line_end
    )
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_native_function()
    {
        assert_eq!(function_source(&FunctionRef::native()), NATIVE_FUNCTION_SOURCE);
    }

    #[test]
    fn test_native_ignores_location()
    {
        let function = FunctionRef {
            native: true,
            file: "ignored.lua".to_string(),
            line_begin: 1,
            line_end: 2,
        };
        assert_eq!(function_source(&function), NATIVE_FUNCTION_SOURCE);
    }

    #[test]
    fn test_main_chunk_location()
    {
        assert_eq!(function_source(&FunctionRef::lua("@init.lua", 0, 0)), "function()\n    @init.lua:0,0\nend");
    }
}
