/*!
# `MOD`

## Purpose
Remove the first two values and push the remainder of dividing the first
by the second.

## Remarks
The remainder takes the sign of the first value. A zero divisor is a
`DIVISION BY ZERO` error.
*/
