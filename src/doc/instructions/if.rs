/*!
# `IFEQ`, `IFNQ`, `IFLT`, `IFGT <target>`

## Purpose
Jump when the first value in the queue is equal to, not equal to, less
than, or greater than the second.

## Remarks
Nothing is removed from the queue. Both values must be integers and there
must be at least two of them.

## Example
```text
PUSH 1
PUSH 2
IFLT SMALLER
PRINT "NOT REACHED"
|SMALLER|
```
*/
