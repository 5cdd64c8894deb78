/*!
# `DIV`

## Purpose
Remove the first two values and push the first divided by the second.

## Remarks
Division truncates toward zero. A zero divisor is a `DIVISION BY ZERO`
error.

## Example
```text
PUSH -7
PUSH 2
DIV
POPLN
```
prints `-3`.
*/
