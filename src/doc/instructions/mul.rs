/*!
# `MUL`

## Purpose
Remove the first two values and push their product.

## Remarks
Both values must be integers. Overflow wraps.
*/
