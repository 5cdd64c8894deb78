/*!
# `ADDK`, `SUBK`, `MULK`, `DIVK`, `MODK`

## Purpose
Arithmetic that keeps its operands.

## Remarks
Each behaves like the instruction without the `K`, except that the first
two values stay at the front of the queue and the result is pushed to the
back. The queue grows by one.

## Example
```text
PUSH 10
PUSH 3
SUBK
QDISPLAY
```
prints `10, 3, 7`.
*/
