/*!
# `READ [<prompt>]`

## Purpose
Show the prompt, read a line of input and push it.

## Remarks
Input that is an integer is pushed as one, anything else as a string.
If input has ended, `INVALID READ` occurs.

## Example
```text
READ "Number? "
PUSH 1
ADD
POPLN
```
*/
