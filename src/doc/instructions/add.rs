/*!
# `ADD`

## Purpose
Remove the first two values and push their sum, or their concatenation.

## Remarks
Two integers are added, wrapping on overflow. Otherwise both values are
written as text and joined in queue order, so `ADD` on strings is not
commutative. An integer joined with a string is written in decimal.

## Example
```text
PUSH "x"
PUSH 1
ADD
POPLN
```
prints `x1`.
*/
