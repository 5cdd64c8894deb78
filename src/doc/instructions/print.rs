/*!
# `PRINT [<literal>]`

## Purpose
Output a literal followed by a newline.

## Remarks
The queue is not touched. A `PRINT` by itself outputs a newline. Anything
that is not an integer or a string literal is an `INVALID PRINT` error.

## Example
```text
PRINT "Hello\nWorld"
PRINT 42
```
*/
