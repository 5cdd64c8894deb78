/*!
# Error Messages

Errors are written to standard error in red, then qu exits with status 255.
Line numbers count from 0.

```text
Error: NOT ENOUGH ARGUMENTS IN LINE 4
```

| Message | Cause |
|---|---|
| `SINGLE DELIMITER` | A line holds exactly one `\|`. Reported with the column. |
| `INVALID JUMP TARGET` | A numeric target is outside the program. |
| `UNRESOLVED JUMP TARGET` | No line declares the target label. |
| `NON-INTEGER RETURN VALUE` | `RET` found a string at the front. |
| `NOT ENOUGH ARGUMENTS` | The queue holds too few values for the instruction. |
| `UNSPECIFIED COMPARISON OPERATION` | A relation other than `==`, `!=`, `<` or `>`. |
| `RETURN FROM EMPTY QUEUE` | `RET` with nothing in the queue. |
| `OPERATION MISMATCH` | Arithmetic or a comparison got a string it cannot use. |
| `INVALID PRINT` | The `PRINT` argument is not a literal. |
| `INVALID READ` | The `READ` prompt is not a literal, or input ended. |
| `INVALID PUSH` | The `PUSH` argument is not a literal. |
| `UNKNOWN INSTRUCTION` | The keyword is not an instruction, or its argument is wrong. |
| `DIVISION BY ZERO` | `DIV`, `MOD` or their K variants with a zero divisor. |
| `BREAK` | CTRL-C stopped the program. |
| `INVALID FILE EXTENSION` | The program file name does not end in `.qu`. |
| `FILE NOT FOUND` | The program file does not exist. |
| `INTERNAL ERROR` | Reading the program or writing output failed. |

## Exit status

| Status | Meaning |
|---|---|
| 0 | The program ran past its last line. |
| `RET` value | Truncated to what the operating system keeps. |
| 255 | Any error, including bad command line options. |
*/
