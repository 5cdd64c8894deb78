/*!
# `SUB`

## Purpose
Remove the first two values and push the first minus the second.

## Remarks
Both values must be integers, otherwise `OPERATION MISMATCH` occurs.
Overflow wraps.

## Example
```text
PUSH 10
PUSH 3
SUB
POPLN
```
prints `7`.
*/
